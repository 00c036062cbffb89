//! Interface implemented by the two actor types.

use rand::rngs::SmallRng;

use crate::common::{BoardError, Coord};

/// A source of shots for one side of the game.
pub trait Player {
    /// Produce the next candidate shot. The actor guarantees only that the
    /// coordinate is well-formed; the opposing board decides legality.
    fn call_shot(&mut self, rng: &mut SmallRng) -> Coord;

    /// Inform the actor that its last candidate was rejected. The session
    /// re-solicits from the same actor afterwards; the turn never passes
    /// on a rejected shot.
    fn handle_rejected_shot(&mut self, _target: Coord, _err: &BoardError) {}
}
