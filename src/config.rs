//! Fleet configuration: grid size and the ship classes a legal fleet is made of.

use alloc::vec::Vec;

use crate::common::Coord;

pub const BOARD_SIZE: usize = 10;
pub const TOTAL_SHIPS: usize = 10;
pub const STANDARD_FLEET: [ShipClass; 4] = [
    ShipClass::new("battleship", 4, 1),
    ShipClass::new("cruiser", 3, 2),
    ShipClass::new("destroyer", 2, 3),
    ShipClass::new("boat", 1, 4),
];

/// A kind of ship: name, number of decks and how many of them a fleet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
    count: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize, count: usize) -> Self {
        Self {
            name,
            length,
            count,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of decks of every ship in this class.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of ships of this class in a complete fleet.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Board dimensions and fleet composition handed to [`crate::Board::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    board_size: usize,
    classes: Vec<ShipClass>,
}

impl FleetConfig {
    /// Create a configuration for a `board_size`×`board_size` grid.
    ///
    /// Classes sharing a length are merged into the first of them, counts summed,
    /// since validation tallies ships by length alone.
    pub fn new(board_size: usize, classes: Vec<ShipClass>) -> Self {
        let mut merged: Vec<ShipClass> = Vec::with_capacity(classes.len());
        for class in classes {
            match merged.iter_mut().find(|c| c.length == class.length) {
                Some(existing) => existing.count += class.count,
                None => merged.push(class),
            }
        }
        Self {
            board_size,
            classes: merged,
        }
    }

    /// The classic 10×10 fleet: one battleship, two cruisers, three destroyers, four boats.
    pub fn standard() -> Self {
        Self::new(BOARD_SIZE, STANDARD_FLEET.to_vec())
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn classes(&self) -> &[ShipClass] {
        &self.classes
    }

    /// Total number of ships in a complete fleet.
    pub fn total_ships(&self) -> usize {
        self.classes.iter().map(ShipClass::count).sum()
    }

    /// Class whose ships have `length` decks, if any.
    pub fn class_for(&self, length: usize) -> Option<&ShipClass> {
        self.classes.iter().find(|class| class.length == length)
    }

    /// Required number of ships with `length` decks.
    pub fn expected_count(&self, length: usize) -> Option<usize> {
        self.class_for(length).map(ShipClass::count)
    }

    /// Returns `true` when `coord` lies on the grid.
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.board_size && col < self.board_size
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn standard_fleet_has_ten_ships() {
        let config = FleetConfig::standard();
        assert_eq!(config.total_ships(), TOTAL_SHIPS);
        assert_eq!(config.board_size(), BOARD_SIZE);
        assert_eq!(config.expected_count(1), Some(4));
        assert_eq!(config.expected_count(2), Some(3));
        assert_eq!(config.expected_count(3), Some(2));
        assert_eq!(config.expected_count(4), Some(1));
        assert_eq!(config.expected_count(5), None);
    }

    #[test]
    fn classes_of_equal_length_are_merged() {
        let config = FleetConfig::new(
            5,
            vec![
                ShipClass::new("boat", 1, 1),
                ShipClass::new("cruiser", 3, 1),
                ShipClass::new("dinghy", 1, 2),
            ],
        );
        assert_eq!(config.classes().len(), 2);
        assert_eq!(config.class_for(1).map(ShipClass::name), Some("boat"));
        assert_eq!(config.expected_count(1), Some(3));
        assert_eq!(config.total_ships(), 4);
    }

    #[test]
    fn bounds() {
        let config = FleetConfig::new(3, STANDARD_FLEET.to_vec());
        assert!(config.contains((2, 2)));
        assert!(!config.contains((3, 0)));
        assert!(!config.contains((0, 3)));
    }
}
