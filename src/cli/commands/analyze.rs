//! Analyze command - Score every legal move of a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::OutputFormat,
        output::{format_number, print_board, print_json, print_kv, print_section},
    },
    search::analyze,
};

#[derive(Parser, Debug)]
#[command(about = "Score every legal move for X")]
pub struct AnalyzeArgs {
    /// Board as nine cells in row-major order, e.g. "XO./.../..."
    pub board: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = super::load_board(&args.board)?;
    let report = analyze(&board);

    if args.format == OutputFormat::Json {
        return print_json(&report);
    }

    print_section("Move Analysis");
    print_board(&board);
    println!();
    print_kv("Outcome", &report.outcome.to_string());
    print_kv("Nodes searched", &format_number(report.nodes));

    if report.moves.is_empty() {
        println!("\n  (no legal moves)");
        return Ok(());
    }

    println!("\n  {:<10} {:>6}", "Move", "Score");
    for scored in &report.moves {
        let marker = if report.best == Some(*scored) { " *" } else { "" };
        println!("  {:<10} {:>6}{marker}", scored.mv.to_string(), scored.score);
    }

    for caveat in &report.caveats {
        println!("\n  note: {}", caveat.describe());
    }
    Ok(())
}
