//! Whole-position analysis: per-move scores plus the selected move

use serde::Serialize;

use super::engine::{Minimax, ScoredMove, pick_best};
use crate::tictactoe::{Board, Outcome, Player, outcome};

/// Everything the searcher knows about a position with X to move
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub board: String,
    pub outcome: Outcome,
    /// Every legal X move in row-major order with its minimax score
    pub moves: Vec<ScoredMove>,
    pub best: Option<ScoredMove>,
    pub nodes: u64,
    pub caveats: Vec<Caveat>,
}

/// Conditions the engine does not reject but callers may want to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Caveat {
    /// The piece counts say O is to move
    NotXToMove,
    /// The piece counts cannot arise from alternating play with X first
    ImpossiblePieceCounts,
    /// A line is already complete; the search still returns a move
    AlreadyDecided,
}

impl Caveat {
    pub fn describe(self) -> &'static str {
        match self {
            Caveat::NotXToMove => "piece counts indicate O is to move; searching for X anyway",
            Caveat::ImpossiblePieceCounts => "piece counts cannot arise from alternating play",
            Caveat::AlreadyDecided => "the game is already won; the returned move is meaningless",
        }
    }
}

/// Preconditions of [`crate::find_best_move`] that `board` violates
pub fn caveats(board: &Board) -> Vec<Caveat> {
    let mut found = Vec::new();
    match board.inferred_to_move() {
        Some(Player::X) => {}
        Some(Player::O) => found.push(Caveat::NotXToMove),
        None => found.push(Caveat::ImpossiblePieceCounts),
    }
    if matches!(outcome(board), Outcome::Win(_)) {
        found.push(Caveat::AlreadyDecided);
    }
    found
}

/// Score every X move on `board` and select the best one
pub fn analyze(board: &Board) -> SearchReport {
    let mut searcher = Minimax::new();
    let moves = searcher.evaluate_moves(board);
    let best = pick_best(&moves);

    let report = SearchReport {
        board: board.encode(),
        outcome: outcome(board),
        moves,
        best,
        nodes: searcher.nodes(),
        caveats: caveats(board),
    };
    log::debug!(
        "analyzed {}: {} moves, {} nodes",
        report.board,
        report.moves.len(),
        report.nodes
    );
    report
}

/// Minimax scores of every legal X move, in row-major order
pub fn evaluate_moves(board: &Board) -> Vec<ScoredMove> {
    Minimax::new().evaluate_moves(board)
}
