//! Working out whether a side is in check or checkmate

use std::collections::HashSet;

use board::{BoardSquare, CheckStatus, Color, Piece};

use crate::GridBoard;

impl GridBoard {
    /// Get the square on which the given player's King resides
    ///
    /// If there's somehow more than one, this is the first one found in row-major order.
    ///
    /// # Panics
    /// If that player has no King on the board. Nothing stops a King being captured by
    /// [`GridBoard::move_piece`], so callers that allow arbitrary moves can get here.
    pub fn king_square(&self, color: Color) -> BoardSquare {
        BoardSquare::all_squares()
            .find(|square| {
                let piece = &self[*square];
                piece.is_king() && piece.is_color(color)
            })
            .unwrap_or_else(|| panic!("no {color} king on the board"))
    }

    /// All of the given player's pieces, in row-major order
    pub fn pieces(&self, color: Color) -> Vec<Piece> {
        BoardSquare::all_squares()
            .map(|square| self[square])
            .filter(|piece| piece.is_color(color))
            .collect()
    }

    /// Returns every square that some piece of the given player can move onto
    pub fn threatened_squares(&self, color: Color) -> HashSet<BoardSquare> {
        self.pieces(color)
            .iter()
            .flat_map(|piece| self.moves(piece))
            .collect()
    }

    /// Returns `true` if the given color's King is in check
    ///
    /// # Panics
    /// If that player has no King (see [`GridBoard::king_square`]).
    pub fn in_check(&self, color: Color) -> bool {
        let king = self.king_square(color);
        self.threatened_squares(color.other()).contains(&king)
    }

    /// Returns `true` if no move by the given player leaves them out of check
    ///
    /// This doesn't look at whether they're in check right now, so a player who isn't in check
    /// but can only move into check counts too.
    ///
    /// # Panics
    /// If that player has no King (see [`GridBoard::king_square`]).
    pub fn is_checkmate(&self, color: Color) -> bool {
        for piece in self.pieces(color) {
            for target in self.moves(&piece) {
                let mut check_board = self.dup();
                check_board.move_piece(piece.position(), target);
                if !check_board.in_check(color) {
                    return false;
                }
            }
        }
        true
    }

    /// The moves for the given piece which leave its owner out of check afterwards
    ///
    /// Empty squares have no moves, so this is empty for them.
    ///
    /// # Panics
    /// If the piece's owner has no King (see [`GridBoard::king_square`]).
    pub fn escape_moves(&self, piece: &Piece) -> Vec<BoardSquare> {
        let Some(color) = piece.color() else {
            return Vec::new();
        };
        self.moves(piece)
            .into_iter()
            .filter(|target| {
                let mut check_board = self.dup();
                check_board.move_piece(piece.position(), *target);
                !check_board.in_check(color)
            })
            .collect()
    }

    /// Returns if the given player is currently in check or checkmate
    pub fn check_status(&self, color: Color) -> CheckStatus {
        if !self.in_check(color) {
            CheckStatus::None
        } else if self.is_checkmate(color) {
            CheckStatus::Checkmate
        } else {
            CheckStatus::Check
        }
    }
}

#[cfg(test)]
mod tests {
    use board::PieceKind;
    use quickcheck::quickcheck;

    use super::*;
    use crate::testing::{play_escaping, Plies};

    fn sq(row: u8, col: u8) -> BoardSquare {
        BoardSquare::from_row_col(row, col)
    }

    /// Build a board out of `(kind, color, row, col)` entries
    fn board_with(pieces: &[(PieceKind, Color, u8, u8)]) -> GridBoard {
        let mut board = GridBoard::new(false);
        for &(kind, color, row, col) in pieces {
            board.place(Piece::new(kind, color, sq(row, col)));
        }
        board
    }

    /// White's king on its home square, boxed in by two rooks
    fn back_rank_mate() -> GridBoard {
        board_with(&[
            (PieceKind::King, Color::White, 7, 4),
            (PieceKind::King, Color::Black, 0, 7),
            (PieceKind::Rook, Color::Black, 6, 0),
            (PieceKind::Rook, Color::Black, 7, 0),
        ])
    }

    /// Like [`back_rank_mate`], but with a knight that leaves e2 open
    fn back_rank_with_hole() -> GridBoard {
        board_with(&[
            (PieceKind::King, Color::White, 7, 4),
            (PieceKind::King, Color::Black, 0, 7),
            (PieceKind::Knight, Color::Black, 4, 4),
            (PieceKind::Rook, Color::Black, 7, 0),
        ])
    }

    #[test]
    fn test_king_square() {
        let board = GridBoard::default();
        assert_eq!(board.king_square(Color::White), sq(7, 4));
        assert_eq!(board.king_square(Color::Black), sq(0, 4));
    }

    #[test]
    #[should_panic(expected = "no White king on the board")]
    fn test_missing_king_panics() {
        let mut board = GridBoard::default();
        board.move_piece(sq(0, 3), sq(7, 4));
        board.in_check(Color::White);
    }

    #[test]
    fn test_pieces_row_major() {
        let board = GridBoard::default();
        let black = board.pieces(Color::Black);
        assert_eq!(black.len(), 16);
        assert_eq!(black[0].position(), sq(0, 0));
        assert_eq!(black[4].kind(), PieceKind::King);
        assert_eq!(black[15].position(), sq(1, 7));
        assert!(board
            .pieces(Color::White)
            .iter()
            .all(|p| matches!(p.position().row(), 6 | 7)));
    }

    #[test]
    fn test_starting_position_is_quiet() {
        let board = GridBoard::default();
        for color in [Color::White, Color::Black] {
            assert!(!board.in_check(color));
            assert!(!board.is_checkmate(color));
            assert_eq!(board.check_status(color), CheckStatus::None);
        }
    }

    #[test]
    fn test_checkmate_positive() {
        let board = back_rank_mate();
        assert!(board.in_check(Color::White));
        assert!(board.is_checkmate(Color::White));
        assert_eq!(board.check_status(Color::White), CheckStatus::Checkmate);
        let king = board[sq(7, 4)];
        assert!(board.escape_moves(&king).is_empty());
        assert_eq!(board.moves(&king).len(), 5);
    }

    #[test]
    fn test_checkmate_negative() {
        let board = back_rank_with_hole();
        assert!(board.in_check(Color::White));
        assert!(!board.is_checkmate(Color::White));
        assert_eq!(board.check_status(Color::White), CheckStatus::Check);
        let king = board[sq(7, 4)];
        assert_eq!(board.escape_moves(&king), vec![sq(6, 4)]);
    }

    #[test]
    fn test_analysis_leaves_board_untouched() {
        let board = back_rank_with_hole();
        let before = board.dup();
        board.is_checkmate(Color::White);
        board.escape_moves(&board[sq(7, 4)]);
        assert_eq!(board, before);
    }

    #[test]
    fn test_fools_mate() {
        let mut board = GridBoard::default();
        board.move_piece(sq(6, 5), sq(5, 5));
        board.move_piece(sq(1, 4), sq(3, 4));
        board.move_piece(sq(6, 6), sq(4, 6));
        assert_eq!(board.check_status(Color::White), CheckStatus::None);
        board.move_piece(sq(0, 3), sq(4, 7));
        assert!(board.in_check(Color::White));
        assert!(board.is_checkmate(Color::White));
        assert!(!board.in_check(Color::Black));
    }

    #[test]
    fn test_blocking_escapes_check() {
        // Like fool's mate, but the g-pawn stayed home so it can step in the way
        let mut board = GridBoard::default();
        board.move_piece(sq(6, 5), sq(5, 5));
        board.move_piece(sq(1, 4), sq(3, 4));
        board.move_piece(sq(6, 7), sq(5, 7));
        board.move_piece(sq(0, 3), sq(4, 7));
        assert!(board.in_check(Color::White));
        // g2-g3 puts a pawn in the way
        let pawn = board[sq(6, 6)];
        assert_eq!(board.escape_moves(&pawn), vec![sq(5, 6)]);
        assert!(!board.is_checkmate(Color::White));
    }

    #[test]
    fn test_stalemate_counts_as_checkmate() {
        let board = board_with(&[
            (PieceKind::King, Color::Black, 0, 0),
            (PieceKind::Queen, Color::White, 2, 1),
            (PieceKind::King, Color::White, 7, 7),
        ]);
        assert!(!board.in_check(Color::Black));
        assert!(board.is_checkmate(Color::Black));
        assert_eq!(board.check_status(Color::Black), CheckStatus::None);
    }

    #[test]
    fn test_escape_moves_of_empty_square() {
        let board = GridBoard::default();
        assert!(board.escape_moves(&board[sq(4, 4)]).is_empty());
    }

    quickcheck! {
        fn test_in_check_matches_threatened_squares(plies: Plies) -> bool {
            let mut board = GridBoard::default();
            play_escaping(&mut board, &plies);
            [Color::White, Color::Black].into_iter().all(|color| {
                let king = board.king_square(color);
                let attacked = board
                    .pieces(color.other())
                    .iter()
                    .any(|piece| board.moves(piece).contains(&king));
                board.in_check(color) == attacked
            })
        }

        fn test_escape_moves_are_exactly_the_safe_moves(plies: Plies) -> bool {
            let mut board = GridBoard::default();
            let color = play_escaping(&mut board, &plies);
            board.pieces(color).iter().all(|piece| {
                let escapes = board.escape_moves(piece);
                board.moves(piece).into_iter().all(|target| {
                    let mut check_board = board.dup();
                    check_board.move_piece(piece.position(), target);
                    check_board.in_check(color) != escapes.contains(&target)
                })
            })
        }

        fn test_checkmate_iff_no_escapes(plies: Plies) -> bool {
            let mut board = GridBoard::default();
            let color = play_escaping(&mut board, &plies);
            let any_escape = board
                .pieces(color)
                .iter()
                .any(|piece| !board.escape_moves(piece).is_empty());
            board.is_checkmate(color) != any_escape
        }
    }
}
