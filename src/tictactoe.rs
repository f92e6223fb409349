//! Tic-Tac-Toe board model and rules

pub mod board;
pub mod lines;
pub mod outcome;

pub use board::{Board, Cell, Move, Player, SIZE};
pub use lines::{Line, LineAnalyzer, WINNING_LINES};
pub use outcome::{
    DRAW_SCORE, O_WIN_SCORE, Outcome, Score, X_WIN_SCORE, evaluate, outcome, winning_line,
};

/// True iff every cell is occupied
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Every empty cell in row-major order
pub fn available_moves(board: &Board) -> Vec<Move> {
    board.available_moves()
}
