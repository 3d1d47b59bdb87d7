//! A chess board stored as an 8x8 grid of pieces
//!
//! Every square always holds a [`Piece`]; vacant squares hold an empty piece rather than nothing.

use core::{
    fmt,
    ops::{Index, IndexMut},
};

use board::{BoardSquare, Color, Piece, PieceKind};

mod check;
pub mod movegen;
#[cfg(test)]
mod testing;

/// The board itself
///
/// Moves made through [`GridBoard::move_piece`] can't be undone, so anything that wants to try a
/// move and look at the result should do it on a [`GridBoard::dup`].
#[derive(Debug, PartialEq, Eq)]
pub struct GridBoard {
    /// Indexed `[row][col]`
    grid: [[Piece; 8]; 8],
}

impl GridBoard {
    /// Make a new board
    ///
    /// If `populate` is set, the pieces are set up for the start of a game. Otherwise every square
    /// is empty.
    pub fn new(populate: bool) -> Self {
        let mut board = Self {
            grid: core::array::from_fn(|row| {
                core::array::from_fn(|col| {
                    Piece::empty(BoardSquare::from_row_col(row as u8, col as u8))
                })
            }),
        };
        if populate {
            board.populate();
        }
        board
    }

    /// Put both sides' pieces on their starting squares
    fn populate(&mut self) {
        for color in [Color::Black, Color::White] {
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                self.place(Piece::new(
                    kind,
                    color,
                    BoardSquare::from_row_col(color.back_row(), col as u8),
                ));
                self.place(Piece::new(
                    PieceKind::Pawn,
                    color,
                    BoardSquare::from_row_col(color.pawn_row(), col as u8),
                ));
            }
        }
    }

    /// Put the given piece on the board at its own position, replacing whatever was there
    ///
    /// # Panics
    /// If the piece's position isn't on the board.
    pub fn place(&mut self, piece: Piece) {
        self[piece.position()] = piece;
    }

    /// Returns if there is a non-empty piece at the given square
    ///
    /// # Panics
    /// If the square isn't on the board.
    pub fn is_occupied(&self, square: BoardSquare) -> bool {
        !self[square].is_empty()
    }

    /// Returns if the given square is on the board
    ///
    /// Check this before indexing with a square that came from somewhere untrusted.
    pub const fn in_bounds(&self, square: BoardSquare) -> bool {
        square.is_valid()
    }

    /// Find the piece at the given square, or `None` if the square isn't on the board
    pub fn get(&self, square: BoardSquare) -> Option<&Piece> {
        let (row, col) = square.to_row_col()?;
        Some(&self.grid[row as usize][col as usize])
    }

    /// Move whatever is at `start` onto `end`
    ///
    /// No legality checking happens here. The piece at `end`, if any, is gone for good, and
    /// `start` is left empty.
    ///
    /// # Panics
    /// If either square isn't on the board. Also, with debug assertions, if `start` is empty.
    pub fn move_piece(&mut self, start: BoardSquare, end: BoardSquare) {
        let mut piece = self[start];
        debug_assert!(!piece.is_empty(), "No piece to move at {start}");
        piece.mark_moved();
        piece.set_position(end);
        self[end] = piece;
        self[start] = Piece::empty(start);
    }

    /// Make a fully independent copy of this board
    ///
    /// Nothing done to the copy is visible through `self`, or the other way around.
    pub fn dup(&self) -> Self {
        let mut board = Self::new(false);
        for square in BoardSquare::all_squares() {
            board[square] = self[square];
        }
        board
    }

    /// All the squares the given piece could move to by its own movement rules
    ///
    /// These moves might leave the mover in check; see [`GridBoard::escape_moves`] for that.
    pub fn moves(&self, piece: &Piece) -> Vec<BoardSquare> {
        movegen::pseudo_legal_moves(self, piece)
    }
}

impl Default for GridBoard {
    /// The board at the start of a game
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for GridBoard {
    fn clone(&self) -> Self {
        self.dup()
    }
}

/// # Panics
/// If the square isn't on the board. Use [`GridBoard::in_bounds`] or [`GridBoard::get`] when the
/// square might be invalid.
impl Index<BoardSquare> for GridBoard {
    type Output = Piece;

    fn index(&self, square: BoardSquare) -> &Piece {
        &self.grid[square.row() as usize][square.col() as usize]
    }
}

impl IndexMut<BoardSquare> for GridBoard {
    fn index_mut(&mut self, square: BoardSquare) -> &mut Piece {
        &mut self.grid[square.row() as usize][square.col() as usize]
    }
}

impl fmt::Display for GridBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for (row_idx, row) in self.grid.iter().enumerate() {
            write!(f, "{} ", 8 - row_idx)?;
            for piece in row {
                f.write_char(' ')?;
                f.write_char(piece.fen_letter())?;
            }
            f.write_char('\n')?;
        }
        f.write_str("   a b c d e f g h\n")
    }
}
