//! Ship and deck state: a straight line of decks that sinks once every deck is dead.

use alloc::vec::Vec;

use crate::common::{BoardError, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A single cell of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

impl Deck {
    fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            alive: true,
        }
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }
}

/// A ship built from its two end coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    decks: Vec<Deck>,
    orientation: Orientation,
    sunk: bool,
}

impl Ship {
    /// Build a ship spanning `start` to `end` inclusive.
    /// The endpoints may be given in either order but must share a row or a column.
    pub fn new(start: Coord, end: Coord) -> Result<Self, BoardError> {
        let (orientation, cells) = span(start, end)?;
        Ok(Ship {
            decks: cells.map(|(row, col)| Deck::new(row, col)).collect(),
            orientation,
            sunk: false,
        })
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Decks in ascending coordinate order.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Coordinates covered by the ship.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.decks.iter().map(Deck::coord)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.deck_index(row, col).is_some()
    }

    /// Returns `true` while at least one deck is alive.
    pub fn is_afloat(&self) -> bool {
        self.decks.iter().any(|deck| deck.alive)
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Position of the deck at (`row`, `col`) within this ship.
    pub fn deck_index(&self, row: usize, col: usize) -> Option<usize> {
        self.decks
            .iter()
            .position(|deck| deck.row == row && deck.col == col)
    }

    /// The deck at (`row`, `col`), or `NotOccupied` when the ship does not cover it.
    pub fn deck_at(&self, row: usize, col: usize) -> Result<&Deck, BoardError> {
        self.deck_index(row, col)
            .map(|i| &self.decks[i])
            .ok_or(BoardError::NotOccupied { row, col })
    }

    /// Kill the deck at (`row`, `col`) and return whether the ship is now sunk.
    /// Firing at a dead deck again is allowed and leaves the state unchanged.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        let index = self
            .deck_index(row, col)
            .ok_or(BoardError::NotOccupied { row, col })?;
        Ok(self.fire_deck(index))
    }

    /// Kill the deck at `index`; the caller has already resolved membership.
    pub(crate) fn fire_deck(&mut self, index: usize) -> bool {
        self.decks[index].alive = false;
        if !self.is_afloat() {
            self.sunk = true;
        }
        self.sunk
    }
}

/// Cells from `start` to `end` inclusive, in ascending order, produced lazily.
pub(crate) fn span(
    start: Coord,
    end: Coord,
) -> Result<(Orientation, impl Iterator<Item = Coord>), BoardError> {
    let ((start_row, start_col), (end_row, end_col)) = (start, end);
    let (orientation, fixed, lo, hi) = if start_row == end_row {
        (
            Orientation::Horizontal,
            start_row,
            start_col.min(end_col),
            start_col.max(end_col),
        )
    } else if start_col == end_col {
        (
            Orientation::Vertical,
            start_col,
            start_row.min(end_row),
            start_row.max(end_row),
        )
    } else {
        return Err(BoardError::NotStraight { start, end });
    };
    let cells = (lo..=hi).map(move |i| match orientation {
        Orientation::Horizontal => (fixed, i),
        Orientation::Vertical => (i, fixed),
    });
    Ok((orientation, cells))
}
