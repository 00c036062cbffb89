//! Game board state: ship placement, buffer reservation and shot resolution.

use core::fmt;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, SHIPS};
use crate::ship::{Orientation, Ship, ShipClass};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Ship type fixed to the playing board's dimensions.
pub type PlacedShip = Ship<u128, { BOARD_SIZE as usize }>;

/// One player's board: the fleet, the reservation zone around it, and the
/// full shot history.
///
/// `reserved` and `shots` are deliberately separate sets. A reserved cell
/// (the one-cell buffer around a ship) only blocks future placement; a
/// shot at it resolves as an ordinary miss. Only cells recorded in `shots`
/// reject repeat fire.
pub struct Board {
    ships: Vec<PlacedShip>,
    ship_map: BB,
    reserved: BB,
    shots: BB,
    hits: BB,
    misses: BB,
    sunk_count: usize,
    hidden: bool,
}

impl Board {
    /// Create an empty board (no ships placed, fleet visible).
    pub fn new() -> Self {
        Board {
            ships: Vec::new(),
            ship_map: BB::new(),
            reserved: BB::new(),
            shots: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
            sunk_count: 0,
            hidden: false,
        }
    }

    #[inline]
    fn in_bounds(coord: Coord) -> bool {
        coord.row < BOARD_SIZE as usize && coord.col < BOARD_SIZE as usize
    }

    /// Place one ship of `class` with its bow at `bow`.
    ///
    /// Fails with `OutOfBounds` if any cell falls off the board, or with
    /// `PlacementConflict` if any cell lands on or next to an existing
    /// ship. On success the ship's cells are marked occupied and its
    /// 8-neighborhood is reserved against further placement.
    pub fn place(
        &mut self,
        class: ShipClass,
        bow: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = PlacedShip::new(class, bow, orientation)?;
        if self.reserved.intersects(ship.mask()) {
            return Err(BoardError::PlacementConflict);
        }
        self.ship_map |= ship.mask();
        self.reserved |= ship.mask().dilate();
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at `target`.
    ///
    /// Fails with `OutOfBounds` off the board and `AlreadyTargeted` for a
    /// cell in the shot history. Otherwise records the shot and reports
    /// hit, miss, or sink. Sinking a ship also reveals its surrounding
    /// cells as misses and takes them out of play: with the no-touch rule
    /// they cannot hold another ship.
    pub fn fire(&mut self, target: Coord) -> Result<ShotOutcome, BoardError> {
        if !Self::in_bounds(target) {
            return Err(BoardError::OutOfBounds);
        }
        if self.shots.get(target.row, target.col)? {
            return Err(BoardError::AlreadyTargeted);
        }
        self.shots.set(target.row, target.col)?;

        match self.ships.iter().position(|s| s.contains(target)) {
            Some(i) => {
                self.hits.set(target.row, target.col)?;
                self.ships[i].register_hit(target);
                if self.ships[i].is_sunk() {
                    let mask = self.ships[i].mask();
                    let name = self.ships[i].class().name();
                    self.sunk_count += 1;
                    let surround = mask.dilate() & !mask;
                    self.shots |= surround;
                    self.misses |= surround;
                    Ok(ShotOutcome::Sunk(name))
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
            None => {
                self.misses.set(target.row, target.col)?;
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// Returns true once every ship on the board has been sunk.
    pub fn is_defeated(&self) -> bool {
        !self.ships.is_empty() && self.sunk_count == self.ships.len()
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Cells excluded from placement: occupied cells plus their buffers.
    pub fn reserved(&self) -> BB {
        self.reserved
    }

    /// Every cell ever shot at.
    pub fn shots(&self) -> BB {
        self.shots
    }

    /// Shot cells that hit a ship.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Shot cells that hit open water.
    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Whether renderers should conceal ship positions.
    pub fn ships_hidden(&self) -> bool {
        self.hidden
    }

    /// Set whether renderers should conceal ship positions. Cosmetic.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Generate a board with the standard fleet placed at random.
    ///
    /// Retries whole candidate boards until one succeeds; see
    /// [`Board::try_randomized`] for the per-board attempt budget.
    pub fn randomized<R: Rng>(rng: &mut R) -> Self {
        let mut restarts = 0u32;
        loop {
            match Self::try_randomized(rng) {
                Some(board) => {
                    if restarts > 0 {
                        log::debug!("fleet placed after {} abandoned boards", restarts);
                    }
                    return board;
                }
                None => restarts += 1,
            }
        }
    }

    /// One Monte-Carlo pass over the fleet: uniform random anchors and
    /// orientations, retrying each ship until it lands legally. Every
    /// attempt, including out-of-bounds ones near the edges, counts
    /// against a single budget of `MAX_PLACEMENT_ATTEMPTS` for the whole
    /// board; exhausting it abandons the board.
    fn try_randomized<R: Rng>(rng: &mut R) -> Option<Self> {
        let mut board = Self::new();
        let mut attempts = 0u32;
        for class in SHIPS {
            loop {
                attempts += 1;
                if attempts > MAX_PLACEMENT_ATTEMPTS {
                    return None;
                }
                let bow = Coord::new(
                    rng.random_range(0..BOARD_SIZE as usize),
                    rng.random_range(0..BOARD_SIZE as usize),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if board.place(class, bow, orientation).is_ok() {
                    break;
                }
            }
        }
        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  shots: {:?},\n  sunk: {}/{},\n  ships: {:?}\n}}",
            self.ship_map,
            self.shots,
            self.sunk_count,
            self.ships.len(),
            self.ships,
        )
    }
}
