//! Goban: a rules engine for Go-like stone placement games.
//!
//! ## Usage
//!
//! - `goban` - Show a demo
//! - `goban gtp` - Start a GTP server for scripts or GUI integration
//! - `goban demo --seed 7 --moves 40` - Play random legal moves and show the result

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use goban::board::{Point, Vertex, format_vertex};
use goban::config::GameConfig;
use goban::constants::DEFAULT_SIZE;
use goban::gtp::GtpEngine;

/// Seed used by `demo` when none is given.
const DEMO_SEED: u64 = 1;

/// Turns played by `demo` when none is given.
const DEMO_MOVES: usize = 60;
use goban::position::Position;

/// Goban: a rules engine for Go-like stone placement games
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (the board is SIZE x SIZE)
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Print diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server on stdin/stdout
    Gtp,
    /// Play random legal moves and print the board and score
    Demo {
        /// Seed for the move generator
        #[arg(long, default_value_t = DEMO_SEED)]
        seed: u64,
        /// Number of turns to play before both players pass
        #[arg(long, default_value_t = DEMO_MOVES)]
        moves: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::new(cli.size).context("invalid --size")?;

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::with_config(&config)
                .context("cannot start GTP server")?
                .verbose(cli.verbose);
            engine.run().context("GTP session failed")?;
        }
        Some(Commands::Demo { seed, moves }) => run_demo(&config, seed, moves, cli.verbose)?,
        None => run_demo(&config, DEMO_SEED, DEMO_MOVES, cli.verbose)?,
    }
    Ok(())
}

fn run_demo(config: &GameConfig, seed: u64, moves: usize, verbose: bool) -> Result<()> {
    println!("Goban: rules engine demo ({0}x{0}, seed {seed})\n", config.size);

    let mut pos = Position::from_config(config)?;
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut rejected = 0;

    for turn in 0..moves {
        let player = pos.to_play();
        let mut empty: Vec<Point> = (0..config.size)
            .flat_map(|r| (0..config.size).map(move |c| (r, c)))
            .filter(|&pt| pos.board().get(pt).is_none())
            .collect();
        rng.shuffle(&mut empty);

        let mut played = None;
        for pt in empty {
            match pos.play(pt) {
                Ok(outcome) => {
                    played = Some((pt, outcome));
                    break;
                }
                Err(e) if e.is_illegal_move() => {
                    rejected += 1;
                    if verbose {
                        eprintln!("turn {turn}: {player} {e}");
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }

        match played {
            Some((pt, outcome)) => {
                let name = format_vertex(Vertex::Point(pt), config.size)
                    .unwrap_or_else(|| format!("{pt:?}"));
                if outcome.captures() > 0 {
                    println!("{player} {name} captures {}", outcome.captures());
                }
            }
            None => {
                println!("{player} has no legal move and passes");
                pos.pass();
            }
        }
    }

    while !pos.is_game_over() {
        pos.pass();
    }

    let score = pos.score();
    println!("\n{}", pos.board());
    println!("Rejected moves: {rejected}");
    println!(
        "Score: Black {}, White {} ({})",
        score.black,
        score.white,
        score.result()
    );
    Ok(())
}
