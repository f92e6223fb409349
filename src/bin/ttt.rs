//! `ttt` - Tic-Tac-Toe minimax solver
//!
//! This CLI provides:
//! - The best move for X on a given board
//! - Minimax scores for every legal move
//! - Static evaluation of a board

use anyhow::Result;
use clap::{Parser, Subcommand};
use minimax::cli::config::CommonConfig;

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Exhaustive minimax solver for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best move for X
    BestMove(minimax::cli::commands::best_move::BestMoveArgs),

    /// Score every legal move for X
    Analyze(minimax::cli::commands::analyze::AnalyzeArgs),

    /// Score a board without searching
    Evaluate(minimax::cli::commands::evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CommonConfig {
        verbose: cli.verbose,
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.default_log_filter()),
    )
    .init();

    match cli.command {
        Commands::BestMove(args) => minimax::cli::commands::best_move::execute(args),
        Commands::Analyze(args) => minimax::cli::commands::analyze::execute(args),
        Commands::Evaluate(args) => minimax::cli::commands::evaluate::execute(args),
    }
}
