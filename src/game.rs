//! Turn resolution: the session state machine driving two actors.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{Coord, ShotOutcome};
use crate::player::Player;

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Computer,
}

/// Session state. The two won states are terminal and never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    HumanTurn,
    ComputerTurn,
    HumanWon,
    ComputerWon,
}

/// One resolved shot, for the driver to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
}

/// A running game: both boards, both actors, whose turn it is.
pub struct GameSession {
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    human_board: Board,
    computer_board: Board,
    state: GameState,
}

impl GameSession {
    /// Start a game. The human moves first.
    pub fn new(
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        human_board: Board,
        computer_board: Board,
    ) -> Self {
        Self {
            human,
            computer,
            human_board,
            computer_board,
            state: GameState::HumanTurn,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The winning side, once the game has ended.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::HumanWon => Some(Side::Human),
            GameState::ComputerWon => Some(Side::Computer),
            GameState::HumanTurn | GameState::ComputerTurn => None,
        }
    }

    pub fn human_board(&self) -> &Board {
        &self.human_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Resolve one shot. Returns `None` once the game is over.
    ///
    /// The acting side keeps proposing candidates until the defending
    /// board accepts one; each rejection is reported back to the actor
    /// and never passes the turn. A hit or sink keeps the turn, a miss
    /// passes it, and sinking the last ship ends the game on the spot,
    /// extra turn or not.
    pub fn tick(&mut self, rng: &mut SmallRng) -> Option<TurnReport> {
        let side = match self.state {
            GameState::HumanTurn => Side::Human,
            GameState::ComputerTurn => Side::Computer,
            GameState::HumanWon | GameState::ComputerWon => return None,
        };
        let (actor, defender) = match side {
            Side::Human => (&mut self.human, &mut self.computer_board),
            Side::Computer => (&mut self.computer, &mut self.human_board),
        };

        let (target, outcome) = loop {
            let target = actor.call_shot(rng);
            match defender.fire(target) {
                Ok(outcome) => break (target, outcome),
                Err(err) => {
                    log::debug!("{:?} shot at {} rejected: {}", side, target, err);
                    actor.handle_rejected_shot(target, &err);
                }
            }
        };

        if defender.is_defeated() {
            self.state = match side {
                Side::Human => GameState::HumanWon,
                Side::Computer => GameState::ComputerWon,
            };
            log::info!("game over: {:?} wins", side);
        } else if !outcome.grants_extra_turn() {
            self.state = match side {
                Side::Human => GameState::ComputerTurn,
                Side::Computer => GameState::HumanTurn,
            };
        }

        Some(TurnReport {
            side,
            target,
            outcome,
        })
    }
}
