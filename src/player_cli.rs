//! Human actor reading shots from standard input.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::{BoardError, Coord};
use crate::player::Player;

pub struct HumanPlayer;

impl HumanPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Parse a human shot: exactly two whitespace-separated 1-indexed
/// integers, converted to a 0-indexed [`Coord`]. Zero is rejected because
/// 1-indexed input has no row or column 0.
pub fn parse_shot(input: &str) -> Option<Coord> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if row == 0 || col == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col - 1))
}

impl Player for HumanPlayer {
    fn call_shot(&mut self, _rng: &mut SmallRng) -> Coord {
        loop {
            print!("Your turn: ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => {
                    // stdin closed; nothing more to play
                    println!();
                    std::process::exit(0);
                }
                Ok(_) => {}
            }
            if line.split_whitespace().count() != 2 {
                println!("Input two coordinates!");
                continue;
            }
            match parse_shot(&line) {
                Some(coord) => return coord,
                None => println!("Input numbers!"),
            }
        }
    }

    fn handle_rejected_shot(&mut self, _target: Coord, err: &BoardError) {
        println!("{}", err);
    }
}
