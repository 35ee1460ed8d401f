mod color;
mod console;
mod errors;
mod game;
mod greeting;
mod logging;
mod models;
mod numberguess;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use color::RandomColor;
use console::{LineReader, LineWriter};
use errors::{ColorError, GameError};
use numberguess::GuessingGame;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tracing::{error, info};

/// Small console games: greetings, guess the number, random colors
#[derive(Parser)]
#[command(name = "console_games")]
#[command(version)]
struct Args {
    /// Seed for the random source, for a reproducible target and color
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Also print each result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the greetings
    Greet,
    /// Play guess the number
    Guess,
    /// Describe a random color, a named one, or `ask` for one
    Color { hue: Option<String> },
}

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn print_json<T: Serialize>(enabled: bool, value: &T) -> Result<(), std::io::Error> {
    if enabled {
        println!("{}", serde_json::to_string(value)?);
    }
    Ok(())
}

fn greet() -> Result<(), RunError> {
    info!("running greetings");
    greeting::run_all(&mut LineWriter::stdout())?;
    Ok(())
}

fn guess(rng: &mut StdRng, json: bool) -> Result<(), RunError> {
    info!("running guess the number");
    let mut game = GuessingGame::new(rng, LineReader::stdin(), LineWriter::stdout());
    let result = game.run()?;
    print_json(json, &result)?;
    Ok(())
}

fn color(rng: &mut StdRng, hue: Option<&str>, json: bool) -> Result<(), RunError> {
    info!("running random color");
    let mut exercise = RandomColor::new(LineReader::stdin(), LineWriter::stdout());
    if let Some(report) = exercise.execute(rng, hue)? {
        print_json(json, &report)?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), RunError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match args.command {
        Some(Command::Greet) => greet(),
        Some(Command::Guess) => guess(&mut rng, args.json),
        Some(Command::Color { hue }) => color(&mut rng, hue.as_deref(), args.json),
        None => {
            greet()?;
            guess(&mut rng, args.json)?;
            color(&mut rng, None, args.json)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logger(&args.log_level);

    // How a game ends never changes the exit code, only a broken console does
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
