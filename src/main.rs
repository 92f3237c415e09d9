//! Gomoku engine command-line front end.
//!
//! ## Usage
//!
//! - `gomoku` / `gomoku play` - Play against the engine over a text protocol on stdin/stdout
//! - `gomoku bench` - Let the engine play both sides and report search statistics

use std::io;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gomoku::protocol::TextProtocol;
use gomoku::rules::check_outcome;
use gomoku::{AIEngine, Board, Difficulty, GameOutcome, GameSession, SearchConfig, Stone};

/// Gomoku: five in a row against a minimax opponent
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Engine strength: shallow, medium or deep
    #[arg(short, long, global = true, default_value = "medium", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "gomoku=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine over the text protocol
    Play {
        /// Pause before each engine reply, in milliseconds
        #[arg(long, default_value_t = 800)]
        think_delay_ms: u64,
    },
    /// Run an engine-vs-engine game and print per-move statistics
    Bench {
        /// Stop after this many moves
        #[arg(long, default_value_t = 60)]
        max_moves: usize,
    },
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    s.parse().map_err(|e: gomoku::GameError| e.to_string())
}

fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter '{default_filter}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match cli.command {
        Some(Commands::Bench { max_moves }) => run_bench(cli.difficulty, max_moves),
        Some(Commands::Play { think_delay_ms }) => run_play(cli.difficulty, think_delay_ms),
        None => run_play(cli.difficulty, 800),
    }
}

fn run_play(difficulty: Difficulty, think_delay_ms: u64) -> Result<()> {
    let session = GameSession::new(difficulty);
    let mut protocol = TextProtocol::new(session, Duration::from_millis(think_delay_ms));
    let stdin = io::stdin();
    protocol
        .run(stdin.lock(), io::stdout())
        .context("text protocol I/O failed")
}

fn run_bench(difficulty: Difficulty, max_moves: usize) -> Result<()> {
    println!("Engine self-play at {difficulty} (depth {})\n", difficulty.depth());

    let mut board = Board::new();
    let mut engine = AIEngine::new(SearchConfig::new(difficulty));
    let mut color = Stone::Black;
    let mut total_nodes = 0u64;
    let mut total_ms = 0u64;

    for ply in 1..=max_moves {
        let result = engine.choose_move(&mut board, color);
        let Some(pos) = result.best_move else {
            bail!("engine found no move at ply {ply}");
        };
        board.push_move(pos, color);
        total_nodes += result.nodes;
        total_ms += result.time_ms;
        println!(
            "{ply:>3}. {:<5} {:<8} nodes {:>7}  {:>5}ms  score {:.1}",
            format!("{color:?}"),
            pos.to_string(),
            result.nodes,
            result.time_ms,
            result.score
        );

        match check_outcome(&board, pos) {
            Some(GameOutcome::Win { winner, .. }) => {
                println!("\n{winner:?} wins after {ply} moves");
                break;
            }
            Some(GameOutcome::Draw) => {
                println!("\nDraw after {ply} moves");
                break;
            }
            None => color = color.opponent(),
        }
    }

    println!("\n{board}");
    println!("Total: {total_nodes} nodes in {total_ms}ms");
    Ok(())
}
