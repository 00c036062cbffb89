use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, render_board, side_by_side, Board, GameSession, GameState, HumanPlayer,
    RandomPlayer, ShotOutcome, Side, TurnReport,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (default).
    Play,
    /// Watch two random agents play each other.
    Sim {
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => play(&mut rng),
        Commands::Sim { games } => sim(&mut rng, games),
    }
}

fn greet() {
    println!();
    println!("welcome to battle ship game");
    println!();
    println!("-----> rules <-----");
    println!("  input format: x y");
    println!("x - line number");
    println!("y - column number");
    println!();
    println!("!!!enjoy the game!!!");
    println!();
}

fn print_boards(session: &GameSession) {
    let us = format!(
        "Player's board:\n\n{}",
        render_board(session.human_board())
    );
    let ai = format!(
        "Computer's board:\n\n{}",
        render_board(session.computer_board())
    );
    println!("{}", side_by_side(&us, &ai));
}

fn announce(report: &TurnReport) {
    if report.side == Side::Computer {
        println!(
            "Computer's shot: {} {}",
            report.target.row + 1,
            report.target.col + 1
        );
    }
    match report.outcome {
        ShotOutcome::Hit => println!("The ship has been shot!"),
        ShotOutcome::Sunk(name) => println!("The ship {} has been destroyed!", name),
        ShotOutcome::Miss => println!("Miss!"),
    }
}

fn play(rng: &mut SmallRng) -> anyhow::Result<()> {
    greet();

    let human_board = Board::randomized(rng);
    let mut computer_board = Board::randomized(rng);
    computer_board.set_hidden(true);

    let mut session = GameSession::new(
        Box::new(HumanPlayer::new()),
        Box::new(RandomPlayer::new()),
        human_board,
        computer_board,
    );

    loop {
        println!("{}", "-".repeat(90));
        print_boards(&session);
        println!("{}", "-".repeat(90));
        match session.state() {
            GameState::HumanTurn => println!("Player's turn!"),
            GameState::ComputerTurn => println!("Computer's turn!"),
            GameState::HumanWon | GameState::ComputerWon => {}
        }
        let Some(report) = session.tick(rng) else {
            break;
        };
        announce(&report);
        if session.winner().is_some() {
            break;
        }
    }

    match session.winner() {
        Some(Side::Human) => println!("Player won!"),
        Some(Side::Computer) => println!("Computer won!"),
        None => {}
    }
    println!("Game over!");
    print_boards(&session);
    Ok(())
}

fn sim(rng: &mut SmallRng, games: u32) -> anyhow::Result<()> {
    let mut first_wins = 0u32;
    for game in 1..=games {
        let mut session = GameSession::new(
            Box::new(RandomPlayer::instant()),
            Box::new(RandomPlayer::instant()),
            Board::randomized(rng),
            Board::randomized(rng),
        );
        let mut shots = 0u32;
        while session.tick(rng).is_some() {
            shots += 1;
        }
        let winner = match session.winner() {
            Some(Side::Human) => {
                first_wins += 1;
                "first"
            }
            _ => "second",
        };
        println!("game {}: {} player won after {} shots", game, winner, shots);
    }
    println!("first player won {}/{} games", first_wins, games);
    Ok(())
}
