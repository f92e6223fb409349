//! Evaluate command - Static score and outcome of a board

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::OutputFormat,
        output::{print_board, print_json, print_kv, print_section},
    },
    tictactoe::{Board, Line, Outcome, Score, evaluate, outcome, winning_line},
};

#[derive(Parser, Debug)]
#[command(about = "Score a board without searching")]
pub struct EvaluateArgs {
    /// Board as nine cells in row-major order, e.g. "XXX/OO./..."
    pub board: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluateOutput {
    pub board: String,
    pub score: Score,
    pub outcome: Outcome,
    pub winning_line: Option<Line>,
    pub empty_cells: usize,
}

pub fn build(board: &Board) -> EvaluateOutput {
    EvaluateOutput {
        board: board.encode(),
        score: evaluate(board),
        outcome: outcome(board),
        winning_line: winning_line(board),
        empty_cells: board.available_moves().len(),
    }
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let board = super::load_board(&args.board)?;
    let output = build(&board);

    if args.format == OutputFormat::Json {
        return print_json(&output);
    }

    print_section("Evaluation");
    print_board(&board);
    println!();
    print_kv("Score", &output.score.to_string());
    print_kv("Outcome", &output.outcome.to_string());
    if let Some(line) = output.winning_line {
        let cells: Vec<String> = line.iter().map(|(r, c)| format!("({r}, {c})")).collect();
        print_kv("Winning line", &cells.join(" "));
    }
    print_kv("Empty cells", &output.empty_cells.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn build_reports_winning_line() {
        let output = build(&Board::from_string("O.X/OX./X..").unwrap());
        assert_eq!(output.score, 10);
        assert_eq!(output.outcome, Outcome::Win(Player::X));
        assert_eq!(output.winning_line, Some([(2, 0), (1, 1), (0, 2)]));
        assert_eq!(output.empty_cells, 4);
    }

    #[test]
    fn build_distinguishes_draw_from_open_board() {
        let draw = build(&Board::from_string("XOX/XOO/OXX").unwrap());
        let open = build(&Board::new());
        assert_eq!(draw.score, open.score);
        assert_eq!(draw.outcome, Outcome::Draw);
        assert_eq!(open.outcome, Outcome::InProgress);
    }
}
