use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use seabattle::{random_layout, Board, BoardError, ErrorKind, FleetConfig, ShotResult};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = FleetConfig::standard();
    let layout = random_layout(&mut rng, &config).unwrap();
    Board::new(layout, &config).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_layouts_are_legal(seed in any::<u64>()) {
        let config = FleetConfig::standard();
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = random_layout(&mut rng, &config).unwrap();
        prop_assert!(Board::new(layout, &config).is_ok());
    }

    #[test]
    fn same_seed_same_layout(seed in any::<u64>()) {
        let config = FleetConfig::standard();
        let a = random_layout(&mut SmallRng::seed_from_u64(seed), &config).unwrap();
        let b = random_layout(&mut SmallRng::seed_from_u64(seed), &config).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn miss_is_pure(seed in any::<u64>(), row in 0..12usize, col in 0..12usize) {
        let mut board = random_board(seed);
        prop_assume!(!board.is_occupied(row, col));
        let before = board.ships().to_vec();
        prop_assert_eq!(board.fire((row, col)), ShotResult::Miss);
        prop_assert_eq!(board.ships(), &before[..]);
    }

    #[test]
    fn last_deck_sinks_in_any_order(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let index = rng.random_range(0..board.ships().len());
        let mut cells: Vec<_> = board.ships()[index].cells().collect();
        cells.shuffle(&mut rng);
        let last = cells.pop().unwrap();
        for cell in cells {
            prop_assert_eq!(board.fire(cell), ShotResult::Hit);
        }
        prop_assert_eq!(board.fire(last), ShotResult::Sunk);
        prop_assert_eq!(board.fire(last), ShotResult::Sunk);
        prop_assert_eq!(board.remaining_ships(), 9);
    }

    #[test]
    fn dropping_a_ship_breaks_the_fleet(seed in any::<u64>(), pick in 0..10usize) {
        let config = FleetConfig::standard();
        let mut layout = random_layout(&mut SmallRng::seed_from_u64(seed), &config).unwrap();
        layout.remove(pick);
        let err = Board::new(layout, &config).unwrap_err();
        prop_assert_eq!(err, BoardError::FleetSize { expected: 10, found: 9 });
    }

    #[test]
    fn boat_next_to_another_ship_is_rejected(seed in any::<u64>(), dr in 0..3usize, dc in 0..3usize) {
        let config = FleetConfig::standard();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut layout = random_layout(&mut rng, &config).unwrap();
        // longest first, so the boats are at the end
        let boat = layout.len() - 1;
        let target = rng.random_range(0..boat);
        let (start, _) = layout[target];
        let (row, col) = (start.0 + dr, start.1 + dc);
        prop_assume!(row >= 1 && col >= 1 && row <= 10 && col <= 10);
        let cell = (row - 1, col - 1);
        layout[boat] = (cell, cell);
        let err = Board::new(layout, &config).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Adjacency);
    }
}
