//! Tic-Tac-Toe move selection by exhaustive minimax
//!
//! This crate provides:
//! - A 3x3 board model with row-major move enumeration
//! - Static evaluation of completed lines (`+10` for X, `-10` for O)
//! - Full minimax search with a scoped mark/unmark discipline
//! - Best-move selection for X with first-found tie-breaking
//! - The `ttt` command-line front end
//!
//! ```
//! use minimax::{find_best_move, tictactoe::{Board, Move}};
//!
//! let board = Board::from_string("XX./OO./...").unwrap();
//! assert_eq!(find_best_move(&board), Some(Move::new(0, 2)));
//!
//! let full = Board::from_string("XOX/XOO/OXX").unwrap();
//! assert_eq!(find_best_move(&full), None);
//! ```

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{
    Minimax, ScoredMove, SearchReport, analyze, best_move_with_score, find_best_move, minimax,
};
pub use tictactoe::{
    Board, Cell, Move, Outcome, Player, Score, available_moves, evaluate, is_full, outcome,
};
