//! Game-tree search over Tic-Tac-Toe positions

pub mod analysis;
pub mod engine;

pub use analysis::{Caveat, SearchReport, analyze, caveats, evaluate_moves};
pub use engine::{Minimax, ScoredMove, best_move_with_score, find_best_move, minimax};
