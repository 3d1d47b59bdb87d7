use core::{fmt, str::FromStr};

/// The types of pieces there are
///
/// [`PieceKind::Empty`] is a real kind: every vacant square on a board holds an empty piece.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Empty,
}
impl PieceKind {
    /// The pieces on the back rank at the start of a game, by column
    pub const BACK_RANK: [PieceKind; 8] = [
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
        Self::Bishop,
        Self::Knight,
        Self::Rook,
    ];

    /// The capitalized version of the letter used for this piece in FEN
    ///
    /// Empty squares use `'.'`.
    pub const fn fen_letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Empty => '.',
        }
    }
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The direction (in rows) this color's pawns advance
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row on which this color's back rank starts the game
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// The row on which this color's pawns start the game
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

/// A piece, as stored on a board
///
/// This is a plain record: it knows where it stands, but not which board it stands on. Anything
/// that needs to look at the rest of the board takes the board as a parameter, so copying a
/// piece onto another board is just a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    /// `None` exactly when `kind` is [`PieceKind::Empty`]
    color: Option<Color>,
    position: BoardSquare,
    /// Only pawns care about this, but every piece tracks it
    has_moved: bool,
}
impl Piece {
    /// Make a new, unmoved piece
    ///
    /// Passing [`PieceKind::Empty`] here is the same as calling [`Piece::empty`].
    pub const fn new(kind: PieceKind, color: Color, position: BoardSquare) -> Self {
        Self {
            kind,
            color: match kind {
                PieceKind::Empty => None,
                _ => Some(color),
            },
            position,
            has_moved: false,
        }
    }

    /// The piece that fills a vacant square
    pub const fn empty(position: BoardSquare) -> Self {
        Self {
            kind: PieceKind::Empty,
            color: None,
            position,
            has_moved: false,
        }
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The color of this piece, or `None` for an empty square
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    pub const fn position(&self) -> BoardSquare {
        self.position
    }

    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    /// Whether this piece is a real piece belonging to `color`
    pub fn is_color(&self, color: Color) -> bool {
        self.color == Some(color)
    }

    pub fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    pub fn set_position(&mut self, position: BoardSquare) {
        self.position = position;
    }

    /// The letter for this piece in FEN: uppercase for white, lowercase for black, `'.'` if empty
    pub const fn fen_letter(&self) -> char {
        match self.color {
            Some(Color::White) => self.kind.fen_letter().to_ascii_uppercase(),
            Some(Color::Black) => self.kind.fen_letter().to_ascii_lowercase(),
            None => self.kind.fen_letter(),
        }
    }

    /// The unicode chess symbol for this piece, or a space if empty
    pub const fn symbol(&self) -> char {
        match (self.kind, self.color) {
            (PieceKind::King, Some(Color::White)) => '♔',
            (PieceKind::Queen, Some(Color::White)) => '♕',
            (PieceKind::Rook, Some(Color::White)) => '♖',
            (PieceKind::Bishop, Some(Color::White)) => '♗',
            (PieceKind::Knight, Some(Color::White)) => '♘',
            (PieceKind::Pawn, Some(Color::White)) => '♙',
            (PieceKind::King, Some(Color::Black)) => '♚',
            (PieceKind::Queen, Some(Color::Black)) => '♛',
            (PieceKind::Rook, Some(Color::Black)) => '♜',
            (PieceKind::Bishop, Some(Color::Black)) => '♝',
            (PieceKind::Knight, Some(Color::Black)) => '♞',
            (PieceKind::Pawn, Some(Color::Black)) => '♟',
            _ => ' ',
        }
    }
}

/// How much trouble a side's king is in
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CheckStatus {
    None,
    Check,
    Checkmate,
}
/// Returns the status as appended to a move in algebraic notation
impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "",
            Self::Check => "+",
            Self::Checkmate => "#",
        })
    }
}

/// The possible outcomes of a game
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameOutcome {
    /// Nobody has won yet
    InProgress,
    /// The given color checkmated the other
    Won(Color),
}

/// A position on the board
///
/// Row 0 is black's back rank and row 7 is white's. Stored in 0x88 method:
/// ```text
/// 0b12345678
///        +-+ Column
///    +-+ Row
///   +   + Must be zero, invalid position if 1
/// ```
///
/// Each square is represented in one byte, and this format makes it easy to do operations and
/// check if the resulting square is valid and on the board.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSquare(pub u8);
impl BoardSquare {
    /// An invalid square
    ///
    /// Please use this instead of making your own so it's obvious if a deliberately-invalid square
    /// appeared.
    pub const INVALID: Self = Self(0xee);

    /// Returns if this square is on the board
    ///
    /// ```
    /// # use board::BoardSquare;
    /// assert!(!BoardSquare::INVALID.is_valid());
    /// assert!(BoardSquare::from_row_col(7, 7).is_valid());
    /// assert!(!BoardSquare::from_row_col(8, 0).is_valid());
    /// ```
    pub const fn is_valid(self) -> bool {
        self.0 & 0x88 == 0
    }

    /// Produce a board square from the row and column, returning [`Self::INVALID`] if they are not
    /// a square on the board.
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        if row < 8 && col < 8 {
            Self(row << 4 | col)
        } else {
            Self::INVALID
        }
    }

    /// Returns the `(row, col)` tuple if this position is valid
    pub const fn to_row_col(self) -> Option<(u8, u8)> {
        if self.is_valid() {
            Some((self.0 >> 4, self.0 & 0x07))
        } else {
            None
        }
    }

    /// The row of this square. Meaningless for an invalid square.
    pub const fn row(self) -> u8 {
        (self.0 >> 4) & 0x0F
    }

    /// The column of this square. Meaningless for an invalid square.
    pub const fn col(self) -> u8 {
        self.0 & 0x0F
    }

    /// Offset the given number of rows and columns.
    ///
    /// ```rust
    /// use board::BoardSquare;
    /// let e2 = BoardSquare::from_row_col(6, 4);
    /// assert_eq!(BoardSquare::from_row_col(4, 4), e2.offset(-2, 0));
    /// assert_eq!(BoardSquare::from_row_col(7, 5), e2.offset(1, 1));
    /// assert!(!e2.offset(2, 0).is_valid());
    /// assert!(!BoardSquare::from_row_col(0, 7).offset(0, 1).is_valid());
    /// ```
    pub const fn offset(self, row: i8, col: i8) -> Self {
        BoardSquareOffset::from_row_col(row, col).offset(self)
    }

    /// An iterator over all valid squares on the board, in row-major order
    ///
    /// ```
    /// assert_eq!(board::BoardSquare::all_squares().count(), 64);
    /// ```
    pub fn all_squares() -> impl Iterator<Item = Self> {
        (0..64u8).map(|idx| Self::from_row_col(idx >> 3, idx & 0x07))
    }

    /// Converts self to its algebraic name (`"a8"` for row 0 column 0), if legal
    pub fn as_algebraic(self) -> Option<String> {
        let (row, col) = self.to_row_col()?;
        Some(format!("{}{}", (b'a' + col) as char, 8 - row))
    }
}
impl fmt::Debug for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_row_col() {
            Some((row, col)) => write!(f, "BoardSquare({row}, {col})"),
            None => write!(f, "BoardSquare(illegal {:X})", self.0),
        }
    }
}
impl fmt::Display for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_algebraic() {
            Some(name) => f.write_str(&name),
            None => f.write_str("XX"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("board position string was invalid")]
pub struct BoardSquareFromStrErr;

impl FromStr for BoardSquare {
    type Err = BoardSquareFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.as_bytes();
        if s.len() != 2 {
            return Err(BoardSquareFromStrErr);
        }
        let col = match s[0] {
            c @ b'a'..=b'h' => c - b'a',
            _ => return Err(BoardSquareFromStrErr),
        };
        let row = match s[1] {
            c @ b'1'..=b'8' => b'8' - c,
            _ => return Err(BoardSquareFromStrErr),
        };
        Ok(Self::from_row_col(row, col))
    }
}

/// An offset on a board
///
/// This struct stores any possible offset in both row and column between any two squares, using
/// only one byte of space.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BoardSquareOffset(u8);
impl BoardSquareOffset {
    /// The offsets corresponding to all possible knight moves
    pub const KNIGHT_MOVES: [BoardSquareOffset; 8] = [
        Self::from_row_col(2, 1),
        Self::from_row_col(2, -1),
        Self::from_row_col(-2, 1),
        Self::from_row_col(-2, -1),
        Self::from_row_col(1, 2),
        Self::from_row_col(1, -2),
        Self::from_row_col(-1, 2),
        Self::from_row_col(-1, -2),
    ];

    /// The offsets corresponding to all possible king moves
    pub const KING_MOVES: [BoardSquareOffset; 8] = [
        Self::from_row_col(1, 1),
        Self::from_row_col(1, 0),
        Self::from_row_col(1, -1),
        Self::from_row_col(0, 1),
        Self::from_row_col(0, -1),
        Self::from_row_col(-1, 1),
        Self::from_row_col(-1, 0),
        Self::from_row_col(-1, -1),
    ];

    /// The directions a rook slides in
    pub const ROOK_DIRECTIONS: [BoardSquareOffset; 4] = [
        Self::from_row_col(1, 0),
        Self::from_row_col(-1, 0),
        Self::from_row_col(0, 1),
        Self::from_row_col(0, -1),
    ];

    /// The directions a bishop slides in
    pub const BISHOP_DIRECTIONS: [BoardSquareOffset; 4] = [
        Self::from_row_col(1, 1),
        Self::from_row_col(1, -1),
        Self::from_row_col(-1, 1),
        Self::from_row_col(-1, -1),
    ];

    /// Produce a new offset from the given row and column amounts
    ///
    /// In debug mode, we assert that the row and column are both on the interval [-7,7] (which
    /// are the only possible offsets). In release mode, we wrap modulo 16 and allow for -8, which
    /// invalidates any square.
    pub const fn from_row_col(row: i8, col: i8) -> Self {
        debug_assert!(-8 < row && row < 8);
        debug_assert!(-8 < col && col < 8);
        Self(((row as u8) << 4) & 0xF0 | (col as u8) & 0x0F)
    }

    /// Offset the given board square
    ///
    /// If the square is already invalid, then the same square is returned unchanged.
    pub const fn offset(self, square: BoardSquare) -> BoardSquare {
        if square.is_valid() {
            BoardSquare(((self.0 & 0x77) + square.0) ^ (self.0 & 0x88))
        } else {
            square
        }
    }

    /// Gets the signed number of columns associated with this offset
    pub const fn col(self) -> i8 {
        (self.0 as i8) << 4 >> 4
    }

    /// Gets the signed number of rows associated with this offset
    pub const fn row(self) -> i8 {
        (self.0 as i8) >> 4
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MoveFromStrErr {
    #[error("a move is two squares, like `e2e4`")]
    WrongLength,
    #[error(transparent)]
    InvalidSquare(#[from] BoardSquareFromStrErr),
}

/// A move from one square to another
///
/// Nothing about this says the move is legal; that's up to whoever makes it.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub start: BoardSquare,
    pub end: BoardSquare,
}
impl Move {
    pub const fn new(start: BoardSquare, end: BoardSquare) -> Self {
        Self { start, end }
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}
/// Parses `e2e4`, `e2 e4` or `e2-e4`
impl FromStr for Move {
    type Err = MoveFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>();
        if squares.len() != 4 || !squares.is_ascii() {
            return Err(MoveFromStrErr::WrongLength);
        }
        Ok(Self {
            start: squares[..2].parse()?,
            end: squares[2..].parse()?,
        })
    }
}
