//! Board state: a ship arena indexed by grid coordinate, validated once at construction.

use alloc::collections::btree_map::{BTreeMap, Entry};
use alloc::vec::Vec;

use crate::common::{BoardError, Coord, ShotResult};
use crate::config::FleetConfig;
use crate::ship::{self, Ship};

/// Index of a ship in the board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(usize);

impl ShipId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Grid index entry: owning ship and the deck's position within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ship: ShipId,
    deck: usize,
}

/// A validated fleet on a square grid.
#[derive(Debug, Clone)]
pub struct Board {
    config: FleetConfig,
    ships: Vec<Ship>,
    grid: BTreeMap<Coord, Cell>,
}

impl Board {
    /// Build and validate a board from `(start, end)` pairs, one per ship.
    ///
    /// Fails if a ship is not straight or leaves the grid, if the fleet does
    /// not match `config`, or if two ships overlap or touch (diagonals included).
    pub fn new<I>(layout: I, config: &FleetConfig) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Coord, Coord)>,
    {
        let mut ships = Vec::new();
        let mut grid = BTreeMap::new();
        let mut overlap = None;

        for (start, end) in layout {
            // bounds are checked before any deck is built
            let (_, mut cells) = ship::span(start, end)?;
            if let Some((row, col)) = cells.find(|&cell| !config.contains(cell)) {
                return Err(BoardError::OutOfBounds { row, col });
            }
            let ship = Ship::new(start, end)?;
            let id = ShipId(ships.len());
            for (deck, (row, col)) in ship.cells().enumerate() {
                match grid.entry((row, col)) {
                    Entry::Vacant(slot) => {
                        slot.insert(Cell { ship: id, deck });
                    }
                    Entry::Occupied(_) => {
                        overlap.get_or_insert((row, col));
                    }
                }
            }
            ships.push(ship);
        }

        let board = Board {
            config: config.clone(),
            ships,
            grid,
        };
        log::debug!("validating board with {} ships", board.ships.len());
        board
            .validate(overlap)
            .inspect_err(|e| log::debug!("board rejected: {}", e))?;
        Ok(board)
    }

    /// Build a board for the standard 10×10 fleet.
    pub fn standard<I>(layout: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Coord, Coord)>,
    {
        Self::new(layout, &FleetConfig::standard())
    }

    /// Checks fleet size, then per-length tallies, then spacing.
    fn validate(&self, overlap: Option<Coord>) -> Result<(), BoardError> {
        let expected = self.config.total_ships();
        if self.ships.len() != expected {
            return Err(BoardError::FleetSize {
                expected,
                found: self.ships.len(),
            });
        }

        if let Some(ship) = self
            .ships
            .iter()
            .find(|ship| self.config.class_for(ship.len()).is_none())
        {
            return Err(BoardError::UnsupportedLength { length: ship.len() });
        }

        let mut classes: Vec<_> = self.config.classes().to_vec();
        classes.sort_by_key(|class| class.length());
        for class in classes {
            let found = self
                .ships
                .iter()
                .filter(|ship| ship.len() == class.length())
                .count();
            if found != class.count() {
                return Err(BoardError::ShipCount {
                    length: class.length(),
                    expected: class.count(),
                    found,
                });
            }
        }

        if let Some(at) = overlap {
            return Err(BoardError::ShipsOverlap { at });
        }

        for (&(row, col), cell) in &self.grid {
            for neighbor in self.neighborhood(row, col) {
                if let Some(other) = self.grid.get(&neighbor) {
                    if other.ship != cell.ship {
                        return Err(BoardError::ShipsTouch {
                            at: (row, col),
                            neighbor,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// In-bounds cells of the 3×3 block centred on (`row`, `col`), the centre included.
    fn neighborhood(&self, row: usize, col: usize) -> impl Iterator<Item = Coord> + '_ {
        let rows = row.saturating_sub(1)..=row + 1;
        rows.flat_map(move |r| (col.saturating_sub(1)..=col + 1).map(move |c| (r, c)))
            .filter(move |&coord| self.config.contains(coord))
    }

    /// Fire at `coord`. Cells without a ship, including ones off the grid, are a miss.
    pub fn fire(&mut self, coord: Coord) -> ShotResult {
        let result = match self.grid.get(&coord) {
            None => ShotResult::Miss,
            Some(cell) => {
                if self.ships[cell.ship.0].fire_deck(cell.deck) {
                    ShotResult::Sunk
                } else {
                    ShotResult::Hit
                }
            }
        };
        log::trace!("shot at ({}, {}): {}", coord.0, coord.1, result);
        result
    }

    /// Glyph for an occupied cell: sunk ship, live deck or dead deck.
    pub fn cell_glyph(&self, row: usize, col: usize) -> Result<char, BoardError> {
        let cell = self
            .grid
            .get(&(row, col))
            .ok_or(BoardError::NotOccupied { row, col })?;
        let ship = &self.ships[cell.ship.0];
        let glyph = if ship.is_sunk() {
            crate::ui::SUNK_DECK
        } else if ship.decks()[cell.deck].alive {
            crate::ui::ALIVE_DECK
        } else {
            crate::ui::DEAD_DECK
        };
        Ok(glyph)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.config.board_size()
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// All ships, in layout order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// Id of the ship occupying (`row`, `col`), if any.
    pub fn ship_id_at(&self, row: usize, col: usize) -> Option<ShipId> {
        self.grid.get(&(row, col)).map(|cell| cell.ship)
    }

    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        self.ship_id_at(row, col).and_then(|id| self.ship(id))
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.grid.contains_key(&(row, col))
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.is_sunk()).count()
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}
