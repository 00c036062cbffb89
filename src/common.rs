//! Common types: coordinates, shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A cell position on the board, 0-indexed `(row, col)`.
///
/// All human-facing surfaces (input parsing, rendering) convert to
/// 1-indexed at the edge; the core never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit a ship segment that was still afloat.
    Hit,
    /// Shot hit open water.
    Miss,
    /// Shot sank a ship, carrying its class name.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// Hits and sinks let the shooter fire again; misses pass the turn.
    pub fn grants_extra_turn(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Shot or placement cell lies outside the board.
    OutOfBounds,
    /// Cell was already shot earlier in the game.
    AlreadyTargeted,
    /// Ship placement overlaps or touches another ship.
    PlacementConflict,
    /// Underlying mask index error.
    Mask(BitBoardError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::Mask(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "You are trying to shoot out of the board!"),
            BoardError::AlreadyTargeted => write!(f, "You have already shot in this cell"),
            BoardError::PlacementConflict => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::Mask(e) => write!(f, "Mask error: {}", e),
        }
    }
}

impl std::error::Error for BoardError {}
