//! Subcommands of the `ttt` binary

pub mod analyze;
pub mod best_move;
pub mod evaluate;

use anyhow::{Context, Result};

use crate::{search::caveats, tictactoe::Board};

/// Parse a board argument, logging any precondition the search will ignore
pub(crate) fn load_board(input: &str) -> Result<Board> {
    let board =
        Board::from_string(input).with_context(|| format!("failed to parse board '{input}'"))?;
    for caveat in caveats(&board) {
        log::warn!("{}: {}", board.encode(), caveat.describe());
    }
    Ok(board)
}
