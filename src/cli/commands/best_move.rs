//! Best-move command - Select X's optimal move for a board

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::OutputFormat,
        output::{print_board, print_json, print_kv, print_section},
    },
    search::best_move_with_score,
    tictactoe::{Board, Move, Player, Score},
};

#[derive(Parser, Debug)]
#[command(about = "Find the best move for X")]
pub struct BestMoveArgs {
    /// Board as nine cells in row-major order, e.g. "XO./.../..."
    pub board: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveOutput {
    pub board: String,
    /// `None` when the board has no empty cell
    #[serde(rename = "move")]
    pub mv: Option<Move>,
    pub score: Option<Score>,
    /// Board after X plays the selected move
    pub result: Option<String>,
}

pub fn build(board: &Board) -> Result<BestMoveOutput> {
    let best = best_move_with_score(board);
    let result = match best {
        Some(best) => Some(board.place(best.mv, Player::X)?.encode()),
        None => None,
    };

    Ok(BestMoveOutput {
        board: board.encode(),
        mv: best.map(|b| b.mv),
        score: best.map(|b| b.score),
        result,
    })
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = super::load_board(&args.board)?;
    let output = build(&board)?;

    if args.format == OutputFormat::Json {
        return print_json(&output);
    }

    print_section("Best Move");
    print_board(&board);
    println!();
    match (output.mv, output.score) {
        (Some(mv), Some(score)) => {
            print_kv("Move", &mv.to_string());
            print_kv("Score", &score.to_string());
            let after = board.place(mv, Player::X)?;
            println!();
            print_board(&after);
        }
        _ => print_kv("Move", "no legal move (board is full)"),
    }
    Ok(())
}
