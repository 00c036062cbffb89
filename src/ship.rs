//! Ship classes and placed ships.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord};

/// Orientation of a ship on the board.
///
/// Horizontal ships extend along columns, vertical ships along rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Class of ship: display name and hull length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Hull length in cells.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on an N×N board, with hits tracked in a `BitBoard`.
///
/// Shape is fixed at construction; only the hit mask mutates afterwards,
/// and only through the board's shot resolution.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    class: ShipClass,
    bow: Coord,
    orientation: Orientation,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Construct a ship with its bow at `bow`, extending `class.length()`
    /// cells along `orientation`. Fails if any cell falls off the board.
    pub fn new(class: ShipClass, bow: Coord, orientation: Orientation) -> Result<Self, BoardError> {
        let len = class.length();
        let fits = match orientation {
            Orientation::Horizontal => bow.row < N && bow.col + len <= N,
            Orientation::Vertical => bow.col < N && bow.row + len <= N,
        };
        if !fits {
            return Err(BoardError::OutOfBounds);
        }

        let mut mask = BitBoard::<T, N>::new();
        for i in 0..len {
            let (r, c) = match orientation {
                Orientation::Horizontal => (bow.row, bow.col + i),
                Orientation::Vertical => (bow.row + i, bow.col),
            };
            mask.set(r, c)?;
        }

        Ok(Ship {
            class,
            bow,
            orientation,
            mask,
            hits: BitBoard::new(),
        })
    }

    /// Cells occupied by the ship, in order from the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self.bow;
        let orientation = self.orientation;
        (0..self.class.length()).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(row, col + i),
            Orientation::Vertical => Coord::new(row + i, col),
        })
    }

    /// Returns true if `coord` is one of the ship's cells.
    pub fn contains(&self, coord: Coord) -> bool {
        self.mask.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Record a hit at `coord`. Returns true if the cell belongs to the
    /// ship. Crate-private: hits arrive only through shot resolution.
    pub(crate) fn register_hit(&mut self, coord: Coord) -> bool {
        if self.contains(coord) {
            let _ = self.hits.set(coord.row, coord.col);
            true
        } else {
            false
        }
    }

    /// Remaining unhit segments.
    pub fn lives(&self) -> usize {
        self.class.length() - self.hits.count_ones()
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.class.length()
    }

    /// Ship's class.
    pub fn class(&self) -> ShipClass {
        self.class
    }

    /// Bow cell the occupied cells are derived from.
    pub fn bow(&self) -> Coord {
        self.bow
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ class: \"{}\", bow: {}, orientation: {:?}, lives: {}/{} }}",
            self.class.name(),
            self.bow,
            self.orientation,
            self.lives(),
            self.class.length(),
        )
    }
}
