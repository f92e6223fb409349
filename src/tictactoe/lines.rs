//! Winning line analysis for Tic-Tac-Toe

use super::{Board, Cell, Player};

/// A line of three `(row, col)` coordinates
pub type Line = [(usize, usize); 3];

/// Winning lines in the order they are checked: rows top to bottom, columns
/// left to right, the main diagonal, then the anti-diagonal.
pub const WINNING_LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The owner of a line, if all three cells hold the same mark
    pub fn line_owner(board: &Board, line: &Line) -> Option<Player> {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let first = board.get(r0, c0);
        if first != Cell::Empty && first == board.get(r1, c1) && first == board.get(r2, c2) {
            first.player()
        } else {
            None
        }
    }

    /// The first completed line in check order, with its owner
    pub fn first_complete_line(board: &Board) -> Option<(Player, Line)> {
        WINNING_LINES.iter().find_map(|line| {
            Self::line_owner(board, line).map(|player| (player, *line))
        })
    }

    /// Check if a player has three in a row anywhere
    pub fn has_won(board: &Board, player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(board, line) == Some(player))
    }
}
