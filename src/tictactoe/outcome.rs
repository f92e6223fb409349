//! Static scoring of a board and the tagged outcome built on top of it

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Board, Player, lines::Line, lines::LineAnalyzer};

/// Minimax score. Only [`X_WIN_SCORE`], [`O_WIN_SCORE`] and [`DRAW_SCORE`] occur.
pub type Score = i32;

pub const X_WIN_SCORE: Score = 10;
pub const O_WIN_SCORE: Score = -10;
/// Also returned by [`evaluate`] for boards that are still in progress
pub const DRAW_SCORE: Score = 0;

/// State of a board as seen by the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Score of this outcome from X's perspective
    pub fn score(self) -> Score {
        match self {
            Outcome::Win(Player::X) => X_WIN_SCORE,
            Outcome::Win(Player::O) => O_WIN_SCORE,
            Outcome::Draw | Outcome::InProgress => DRAW_SCORE,
        }
    }

    /// Swap the winner perspective (X <-> O)
    pub fn swap_players(self) -> Self {
        match self {
            Outcome::Win(player) => Outcome::Win(player.opponent()),
            other => other,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::InProgress => write!(f, "in progress"),
        }
    }
}

/// Score a board: `+10` if the first completed line belongs to X, `-10` if it
/// belongs to O, `0` otherwise.
///
/// `0` covers both draws and unfinished games; pair it with
/// [`Board::is_full`] or use [`outcome`] to tell them apart.
///
/// ```
/// use minimax::tictactoe::{Board, evaluate};
///
/// assert_eq!(evaluate(&Board::from_string("XXX/OO./...").unwrap()), 10);
/// assert_eq!(evaluate(&Board::new()), 0);
/// ```
pub fn evaluate(board: &Board) -> Score {
    match LineAnalyzer::first_complete_line(board) {
        Some((Player::X, _)) => X_WIN_SCORE,
        Some((Player::O, _)) => O_WIN_SCORE,
        None => DRAW_SCORE,
    }
}

/// Classify a board as won, drawn, or still in progress
pub fn outcome(board: &Board) -> Outcome {
    match LineAnalyzer::first_complete_line(board) {
        Some((player, _)) => Outcome::Win(player),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// The line that decides [`evaluate`], if any
pub fn winning_line(board: &Board) -> Option<Line> {
    LineAnalyzer::first_complete_line(board).map(|(_, line)| line)
}
