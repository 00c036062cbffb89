mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod render;
mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use render::*;
pub use ship::*;
