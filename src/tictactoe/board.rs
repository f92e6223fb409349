//! Board representation and the basic queries the search relies on

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the board
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    fn swapped(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// A player in the game. X maximizes, O minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move, naming the cell at `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Row-major index (0-8)
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of cells addressed by `(row, col)`.
///
/// Any combination of marks is representable; nothing enforces alternating
/// turns. The type is `Copy` (9 bytes), so snapshots are cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from a nested grid, rejecting anything that is not 3 rows of 3 cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedBoard`] when the row count or any row length is wrong.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, crate::Error> {
        if rows.len() != SIZE {
            return Err(crate::Error::MalformedBoard {
                reason: format!("expected {SIZE} rows, got {}", rows.len()),
            });
        }

        let mut board = Board::new();
        for (r, row) in rows.into_iter().enumerate() {
            board.cells[r] = row.try_into().map_err(|row: Vec<Cell>| {
                crate::Error::MalformedBoard {
                    reason: format!("row {r} has {} cells, expected {SIZE}", row.len()),
                }
            })?;
        }
        Ok(board)
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace and the row separators `/` and `|` are ignored; exactly nine
    /// cell characters must remain. `.`, `-` and `_` are empty cells.
    ///
    /// ```
    /// use minimax::tictactoe::{Board, Cell};
    ///
    /// let board = Board::from_string("XO./.../...").unwrap();
    /// assert_eq!(board.get(0, 0), Cell::X);
    /// assert_eq!(board.get(0, 1), Cell::O);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not nine or any character is not a
    /// valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if chars.len() != SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            board.cells[i / SIZE][i % SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }
        Ok(board)
    }

    /// Get cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row][mv.col] = cell;
    }

    /// True iff no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Every empty cell, in row-major order.
    ///
    /// The order is significant: the move selector keeps the first of several
    /// equally scored moves.
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(SIZE * SIZE);
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.is_empty(row, col) {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Number of cells holding the given value
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// The side to move assuming X opened, or `None` when the counts cannot
    /// arise from alternating play.
    pub fn inferred_to_move(&self) -> Option<Player> {
        let x = self.count(Cell::X);
        let o = self.count(Cell::O);
        if x == o {
            Some(Player::X)
        } else if x == o + 1 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Place a mark and return the new board
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, mv: Move, player: Player) -> Result<Board, crate::Error> {
        if mv.row >= SIZE || mv.col >= SIZE {
            return Err(crate::Error::InvalidPosition {
                row: mv.row,
                col: mv.col,
            });
        }

        if !self.is_empty(mv.row, mv.col) {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.set(mv, player.to_cell());
        Ok(next)
    }

    /// Swap X and O marks on the board
    #[must_use = "swap_marks returns a new board; the original is unchanged"]
    pub fn swap_marks(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut().flatten() {
            *cell = cell.swapped();
        }
        swapped
    }

    /// Compact nine-character encoding, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[[Cell; SIZE]; SIZE]> for Board {
    fn from(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Board { cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if r + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_row_major() {
        let board = Board::from_string("X.O/.X./O..").unwrap();
        assert_eq!(
            board.available_moves(),
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_available_moves_empty_and_full() {
        assert_eq!(Board::new().available_moves().len(), 9);
        assert_eq!(Board::new().available_moves()[0], Move::new(0, 0));

        let full = Board::from_string("XOXXOOOXX").unwrap();
        assert!(full.is_full());
        assert!(full.available_moves().is_empty());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(0, 0), Cell::X);
        assert_eq!(board.get(0, 1), Cell::O);
        assert_eq!(board.get(0, 2), Cell::X);

        let spaced = Board::from_string("XOX | ... | ...").unwrap();
        assert_eq!(spaced, board);

        let result = Board::from_string("XO");
        assert!(result.is_err());

        let result = Board::from_string("XOX.......");
        assert!(result.is_err());

        let result = Board::from_string("XOZ......");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_string_reports_offending_cell() {
        let err = Board::from_string("XO./.Q./...").unwrap_err();
        match err {
            crate::Error::InvalidCellCharacter {
                character,
                position,
                ..
            } => {
                assert_eq!(character, 'Q');
                assert_eq!(position, 4);
            }
            other => panic!("expected InvalidCellCharacter, got {other}"),
        }
    }

    #[test]
    fn test_from_rows_rejects_malformed_grids() {
        let ok = Board::from_rows(vec![
            vec![Cell::X, Cell::O, Cell::Empty],
            vec![Cell::Empty; 3],
            vec![Cell::Empty; 3],
        ])
        .unwrap();
        assert_eq!(ok, Board::from_string("XO.......").unwrap());

        let short = Board::from_rows(vec![vec![Cell::Empty; 3]; 2]);
        assert!(matches!(short, Err(crate::Error::MalformedBoard { .. })));

        let ragged = Board::from_rows(vec![
            vec![Cell::Empty; 3],
            vec![Cell::Empty; 4],
            vec![Cell::Empty; 3],
        ]);
        let err = ragged.unwrap_err();
        assert!(err.to_string().contains("row 1 has 4 cells"));
    }

    #[test]
    fn test_place() {
        let board = Board::new();
        let next = board.place(Move::new(1, 1), Player::X).unwrap();
        assert_eq!(next.get(1, 1), Cell::X);
        assert_eq!(board.get(1, 1), Cell::Empty);

        let occupied = next.place(Move::new(1, 1), Player::O);
        assert!(occupied.unwrap_err().to_string().contains("occupied"));

        let out_of_bounds = next.place(Move::new(3, 0), Player::O);
        assert!(matches!(
            out_of_bounds,
            Err(crate::Error::InvalidPosition { row: 3, col: 0 })
        ));
    }

    #[test]
    fn test_swap_marks() {
        let board = Board::from_string("XO./.X./..O").unwrap();
        let swapped = board.swap_marks();
        assert_eq!(swapped.encode(), "OX..O...X");
        assert_eq!(swapped.swap_marks(), board);
    }

    #[test]
    fn test_inferred_to_move() {
        assert_eq!(Board::new().inferred_to_move(), Some(Player::X));
        assert_eq!(
            Board::from_string("X........").unwrap().inferred_to_move(),
            Some(Player::O)
        );
        assert_eq!(
            Board::from_string("XX.......").unwrap().inferred_to_move(),
            None
        );
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
        assert_eq!(format!("{}", Move::new(2, 1)), "(2, 1)");
        assert_eq!(Move::new(2, 1).index(), 7);
    }
}
