//! Computer actor: uniform random shots over the board.

use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::Coord;
use crate::config::{AGENT_MOVE_DELAY, BOARD_SIZE};
use crate::player::Player;

/// Memoryless opponent. Candidates may repeat already-shot cells; the
/// session's retry loop absorbs the rejections.
pub struct RandomPlayer {
    delay: Duration,
}

impl RandomPlayer {
    /// Opponent with the standard thinking pause before each shot.
    pub fn new() -> Self {
        Self {
            delay: AGENT_MOVE_DELAY,
        }
    }

    /// Opponent that answers immediately. For simulations and tests.
    pub fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

impl Player for RandomPlayer {
    fn call_shot(&mut self, rng: &mut SmallRng) -> Coord {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Coord::new(
            rng.random_range(0..BOARD_SIZE as usize),
            rng.random_range(0..BOARD_SIZE as usize),
        )
    }
}
