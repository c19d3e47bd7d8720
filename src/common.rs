//! Common types for the board: coordinates, shot results and board errors.

/// Grid coordinate as `(row, column)`.
pub type Coord = (usize, usize);

/// Outcome of a shot at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// No ship occupies the targeted cell.
    Miss,
    /// A deck was hit but its ship still has live decks.
    Hit,
    /// The ship owning the targeted deck has no live decks left.
    Sunk,
}

impl core::fmt::Display for ShotResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotResult::Miss => write!(f, "Miss!"),
            ShotResult::Hit => write!(f, "Hit!"),
            ShotResult::Sunk => write!(f, "Sunk!"),
        }
    }
}

/// Broad category of a [`BoardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong total number of ships or wrong tally for some length.
    FleetComposition,
    /// Two ships share or touch a cell.
    Adjacency,
    /// A ship is not a straight line or leaves the grid.
    Placement,
    /// A coordinate was queried on a ship or board that has no deck there.
    Membership,
    /// A random layout could not be produced.
    Generation,
}

/// Errors returned by Board and Ship operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The fleet does not have the configured number of ships.
    FleetSize { expected: usize, found: usize },
    /// The fleet has the wrong number of ships with `length` decks.
    ShipCount {
        length: usize,
        expected: usize,
        found: usize,
    },
    /// No ship class has this many decks.
    UnsupportedLength { length: usize },
    /// Two ships claim the same cell.
    ShipsOverlap { at: Coord },
    /// Decks of two different ships are neighbours.
    ShipsTouch { at: Coord, neighbor: Coord },
    /// Ship endpoints differ in both row and column.
    NotStraight { start: Coord, end: Coord },
    /// A deck lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// No deck at the requested coordinate.
    NotOccupied { row: usize, col: usize },
    /// Random placement ran out of attempts.
    UnableToPlaceFleet,
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::FleetSize { .. }
            | BoardError::ShipCount { .. }
            | BoardError::UnsupportedLength { .. } => ErrorKind::FleetComposition,
            BoardError::ShipsOverlap { .. } | BoardError::ShipsTouch { .. } => {
                ErrorKind::Adjacency
            }
            BoardError::NotStraight { .. } | BoardError::OutOfBounds { .. } => {
                ErrorKind::Placement
            }
            BoardError::NotOccupied { .. } => ErrorKind::Membership,
            BoardError::UnableToPlaceFleet => ErrorKind::Generation,
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::FleetSize { expected, found } => write!(
                f,
                "The board must hold {} ships, found {}",
                expected, found
            ),
            BoardError::ShipCount {
                length,
                expected,
                found,
            } => write!(
                f,
                "The board must hold {} ships with {} decks, found {}",
                expected, length, found
            ),
            BoardError::UnsupportedLength { length } => {
                write!(f, "No ship class has {} decks", length)
            }
            BoardError::ShipsOverlap { at } => {
                write!(f, "Ships overlap at ({}, {})", at.0, at.1)
            }
            BoardError::ShipsTouch { at, neighbor } => write!(
                f,
                "Ships touch each other at ({}, {}) and ({}, {})",
                at.0, at.1, neighbor.0, neighbor.1
            ),
            BoardError::NotStraight { start, end } => write!(
                f,
                "Ship from ({}, {}) to ({}, {}) is not a straight line",
                start.0, start.1, end.0, end.1
            ),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Deck at ({}, {}) is out of bounds", row, col)
            }
            BoardError::NotOccupied { row, col } => {
                write!(f, "No deck at ({}, {})", row, col)
            }
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place the fleet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
