//! Board parsing, queries, and outcome classification

use minimax::{
    Error,
    tictactoe::{Board, Cell, Move, Outcome, Player, available_moves, is_full, outcome},
};

mod parsing {
    use super::*;

    #[test]
    fn accepts_compact_and_separated_forms() {
        let compact = Board::from_string("XO.X.O...").unwrap();
        for variant in ["XO./X.O/...", "XO.|X.O|...", "XO.\nX.O\n...", "xo-x_0..."] {
            assert_eq!(Board::from_string(variant).unwrap(), compact, "{variant}");
        }
    }

    #[test]
    fn rejects_wrong_cell_count() {
        match Board::from_string("XO./X.O/..") {
            Err(Error::InvalidBoardLength { expected, got, .. }) => {
                assert_eq!(expected, 9);
                assert_eq!(got, 8);
            }
            other => panic!("expected InvalidBoardLength, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = Board::from_string("XO./X?O/...").unwrap_err();
        assert!(err.to_string().contains("'?'"), "{err}");
    }

    #[test]
    fn display_round_trips_through_parser() {
        let board = Board::from_string("X.O/.X./O.X").unwrap();
        assert_eq!(Board::from_string(&board.to_string()).unwrap(), board);
    }
}

mod queries {
    use super::*;

    #[test]
    fn available_moves_follow_row_major_order() {
        let board = Board::from_string(".X./O.O/.X.").unwrap();
        let moves = available_moves(&board);
        assert_eq!(
            moves,
            vec![
                Move::new(0, 0),
                Move::new(0, 2),
                Move::new(1, 1),
                Move::new(2, 0),
                Move::new(2, 2),
            ]
        );
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn fullness_tracks_empty_cells() {
        let mut board = Board::new();
        let mut player = Player::X;
        for mv in Board::new().available_moves() {
            assert!(!is_full(&board));
            board = board.place(mv, player).unwrap();
            player = player.opponent();
        }
        assert!(is_full(&board));
        assert_eq!(board.count(Cell::X), 5);
        assert_eq!(board.count(Cell::O), 4);
    }
}

mod outcomes {
    use super::*;

    #[test]
    fn win_takes_precedence_over_full_board() {
        let board = Board::from_string("XOX/OXO/OXX").unwrap();
        assert!(is_full(&board));
        assert_eq!(outcome(&board), Outcome::Win(Player::X));
    }

    #[test]
    fn each_line_is_detected() {
        for line in minimax::tictactoe::WINNING_LINES {
            let mut board = Board::new();
            for (row, col) in line {
                board = board.place(Move::new(row, col), Player::O).unwrap();
            }
            assert_eq!(outcome(&board), Outcome::Win(Player::O), "{line:?}");
            assert_eq!(outcome(&board.swap_marks()), Outcome::Win(Player::X));
        }
    }
}
