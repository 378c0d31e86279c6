//! zurts - Entry Point
//!
//! Parses the CLI, loads configuration, sets up logging, and runs one
//! interactive game in the terminal.

use clap::Parser;
use std::path::PathBuf;

use zurts::core::config::GameConfig;
use zurts::core::error::Result;
use zurts::game::{Game, GameOutcome};

/// Turn-based arena mini-game: out-throw the zurts before they corner you
#[derive(Parser, Debug)]
#[command(name = "zurts")]
#[command(about = "Turn-based arena mini-game: out-throw the zurts before they corner you")]
struct Args {
    /// Arena rows (1-20)
    #[arg(long)]
    rows: Option<u32>,

    /// Arena columns (1-20)
    #[arg(long)]
    cols: Option<u32>,

    /// Number of zurts to spawn (0-100)
    #[arg(long)]
    zurts: Option<usize>,

    /// Random seed for deterministic games
    #[arg(long)]
    seed: Option<u64>,

    /// Optional TOML config file; CLI flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(zurts) = args.zurts {
        config.zurts = zurts;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    let mut game = Game::new(&config);
    match game.play()? {
        GameOutcome::Won => println!("You win."),
        GameOutcome::Lost => println!("You lose."),
    }
    Ok(())
}
