//! Random generation of legal fleet layouts.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::iter;

use rand::Rng;

use crate::common::{BoardError, Coord};
use crate::config::FleetConfig;
use crate::ship::Orientation;

const ATTEMPTS_PER_SHIP: usize = 100;
const ATTEMPTS_PER_FLEET: usize = 50;

/// Returns a layout of `(start, end)` pairs that [`crate::Board::new`] accepts for `config`.
///
/// Ships are placed longest first; each one is retried at random positions until it
/// neither overlaps nor touches an earlier ship. If a ship cannot be placed the whole
/// fleet is started over, up to a fixed number of times.
pub fn random_layout<R: Rng>(
    rng: &mut R,
    config: &FleetConfig,
) -> Result<Vec<(Coord, Coord)>, BoardError> {
    let size = config.board_size();
    let mut lengths: Vec<usize> = config
        .classes()
        .iter()
        .flat_map(|class| iter::repeat(class.length()).take(class.count()))
        .collect();
    if lengths.iter().any(|&len| len == 0 || len > size) {
        return Err(BoardError::UnableToPlaceFleet);
    }
    lengths.sort_unstable_by(|a, b| b.cmp(a));

    for attempt in 0..ATTEMPTS_PER_FLEET {
        if let Some(layout) = try_layout(rng, size, &lengths) {
            log::debug!("placed {} ships after {} restarts", layout.len(), attempt);
            return Ok(layout);
        }
    }
    Err(BoardError::UnableToPlaceFleet)
}

fn try_layout<R: Rng>(
    rng: &mut R,
    size: usize,
    lengths: &[usize],
) -> Option<Vec<(Coord, Coord)>> {
    // cells taken by a ship or its border
    let mut blocked: BTreeSet<Coord> = BTreeSet::new();
    let mut layout = Vec::with_capacity(lengths.len());

    for &len in lengths {
        let (start, end, orient) = (0..ATTEMPTS_PER_SHIP).find_map(|_| {
            let candidate = random_span(rng, size, len);
            let free = span_cells(candidate.0, candidate.2, len).all(|c| !blocked.contains(&c));
            free.then_some(candidate)
        })?;

        for (row, col) in span_cells(start, orient, len) {
            for r in row.saturating_sub(1)..=row + 1 {
                for c in col.saturating_sub(1)..=col + 1 {
                    blocked.insert((r, c));
                }
            }
        }
        layout.push((start, end));
    }
    Some(layout)
}

/// Random in-bounds span of `len` cells: start, end and orientation.
fn random_span<R: Rng>(rng: &mut R, size: usize, len: usize) -> (Coord, Coord, Orientation) {
    let orient = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_r, max_c) = match orient {
        Orientation::Horizontal => (size - 1, size - len),
        Orientation::Vertical => (size - len, size - 1),
    };
    let r = rng.random_range(0..=max_r);
    let c = rng.random_range(0..=max_c);
    let end = match orient {
        Orientation::Horizontal => (r, c + len - 1),
        Orientation::Vertical => (r + len - 1, c),
    };
    ((r, c), end, orient)
}

fn span_cells(start: Coord, orient: Orientation, len: usize) -> impl Iterator<Item = Coord> {
    (0..len).map(move |i| match orient {
        Orientation::Horizontal => (start.0, start.1 + i),
        Orientation::Vertical => (start.0 + i, start.1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShipClass;
    use crate::Board;
    use alloc::vec;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn standard_layout_builds_a_board() {
        let mut rng = SmallRng::seed_from_u64(7);
        let config = FleetConfig::standard();
        let layout = random_layout(&mut rng, &config).unwrap();
        assert_eq!(layout.len(), 10);
        Board::new(layout, &config).unwrap();
    }

    #[test]
    fn impossible_fleet_gives_up() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = FleetConfig::new(2, vec![ShipClass::new("boat", 1, 2)]);
        assert_eq!(
            random_layout(&mut rng, &config),
            Err(BoardError::UnableToPlaceFleet)
        );

        let config = FleetConfig::new(3, vec![ShipClass::new("battleship", 4, 1)]);
        assert_eq!(
            random_layout(&mut rng, &config),
            Err(BoardError::UnableToPlaceFleet)
        );
    }
}
