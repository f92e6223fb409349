//! Exhaustive minimax search and best-move selection for X

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{
    Board, Cell, DRAW_SCORE, Move, O_WIN_SCORE, Player, Score, X_WIN_SCORE, evaluate,
};

/// A candidate move and the minimax score it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    #[serde(rename = "move")]
    pub mv: Move,
    pub score: Score,
}

/// A mark placed for the duration of a scope.
///
/// The cell is cleared again when the guard drops, so the borrowed board is
/// back in its original state on every path out of the scope.
struct MarkGuard<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> MarkGuard<'a> {
    fn place(board: &'a mut Board, mv: Move, player: Player) -> Self {
        debug_assert!(board.is_empty(mv.row, mv.col));
        board.set(mv, player.to_cell());
        MarkGuard { board, mv }
    }
}

impl Deref for MarkGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MarkGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MarkGuard<'_> {
    fn drop(&mut self) {
        self.board.set(self.mv, Cell::Empty);
    }
}

/// Minimax searcher. Keeps a count of visited nodes for diagnostics.
#[derive(Debug, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `minimax` calls made so far
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score `board` under perfect play. X maximizes, O minimizes.
    ///
    /// A completed line ends the search regardless of remaining empty cells
    /// or search depth. The board is mutated only while the call runs.
    pub fn minimax(&mut self, board: &mut Board, maximizing: bool) -> Score {
        self.nodes += 1;

        let score = evaluate(board);
        if score == X_WIN_SCORE || score == O_WIN_SCORE {
            return score;
        }
        if board.is_full() {
            return DRAW_SCORE;
        }

        let (player, mut best) = if maximizing {
            (Player::X, Score::MIN)
        } else {
            (Player::O, Score::MAX)
        };

        for mv in board.available_moves() {
            let value = {
                let mut marked = MarkGuard::place(board, mv, player);
                self.minimax(&mut marked, !maximizing)
            };
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }

    /// Score every legal X move on `board`, in row-major order.
    pub fn evaluate_moves(&mut self, board: &Board) -> Vec<ScoredMove> {
        let mut scratch = *board;
        let moves = scratch.available_moves();
        let mut scored = Vec::with_capacity(moves.len());

        for mv in moves {
            let score = {
                let mut marked = MarkGuard::place(&mut scratch, mv, Player::X);
                self.minimax(&mut marked, false)
            };
            scored.push(ScoredMove { mv, score });
        }

        debug_assert_eq!(&scratch, board);
        scored
    }

    /// The best move for X with its score, or `None` on a full board.
    ///
    /// Ties keep the earliest move in row-major order.
    pub fn best_move(&mut self, board: &Board) -> Option<ScoredMove> {
        let start = self.nodes;
        let best = pick_best(&self.evaluate_moves(board));
        log::debug!(
            "searched {} nodes for {}: best {:?}",
            self.nodes - start,
            board.encode(),
            best
        );
        best
    }
}

/// First move with a strictly greater score than everything before it
pub(crate) fn pick_best(moves: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for &candidate in moves {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Score `board` under perfect play with X maximizing and O minimizing.
///
/// The board is restored before returning.
pub fn minimax(board: &mut Board, maximizing: bool) -> Score {
    Minimax::new().minimax(board, maximizing)
}

/// The best move for X, or `None` when the board has no empty cell.
///
/// X is assumed to be the side to move; piece counts are not checked. A board
/// that is already won still yields a move.
///
/// ```
/// use minimax::{find_best_move, tictactoe::{Board, Move}};
///
/// let board = Board::from_string("XX./OO./...").unwrap();
/// assert_eq!(find_best_move(&board), Some(Move::new(0, 2)));
/// ```
pub fn find_best_move(board: &Board) -> Option<Move> {
    best_move_with_score(board).map(|best| best.mv)
}

/// Like [`find_best_move`], also returning the move's minimax score
pub fn best_move_with_score(board: &Board) -> Option<ScoredMove> {
    Minimax::new().best_move(board)
}
