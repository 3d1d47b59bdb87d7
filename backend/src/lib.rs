use board::{BoardSquare, Color, GameOutcome, Move};
use grid::GridBoard;
use players::Player;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Why a move wasn't allowed
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("{0} isn't on the board")]
    OutOfBounds(BoardSquare),
    #[error("there's no piece on {0} to move")]
    NoPieceAtStart(BoardSquare),
    #[error("the piece on {0} belongs to the other player")]
    NotYourPiece(BoardSquare),
    #[error("that piece can't move from {} to {}", .0.start, .0.end)]
    MoveNotAvailable(Move),
    #[error("attempted move puts moving side's king in check")]
    MovingIntoCheck,
}

/// A backend which queries moves from the two players until the game is done
pub struct Backend<White, Black> {
    /// The current state of the board
    board: GridBoard,
    side_to_move: Color,
    /// The white player
    white_player: White,
    /// The black player
    black_player: Black,
    /// How many moves each side has made between them
    half_moves: usize,
}

impl<White: Player, Black: Player> Backend<White, Black> {
    /// Create a new instance with the chess starting board
    pub fn new(white_player: White, black_player: Black) -> Self {
        Self::from_board(GridBoard::default(), Color::White, white_player, black_player)
    }

    /// Pick up a game from the given board
    pub fn from_board(
        board: GridBoard,
        side_to_move: Color,
        white_player: White,
        black_player: Black,
    ) -> Self {
        Self {
            board,
            side_to_move,
            white_player,
            black_player,
            half_moves: 0,
        }
    }

    /// Check if the side to move is allowed to make this move right now.
    ///
    /// Returns `Ok(())` if the move is legal, otherwise `Err(..)` containing the reason why the
    /// move is illegal.
    pub fn check_move_legality(&self, mv: Move) -> Result<()> {
        for square in [mv.start, mv.end] {
            if !self.board.in_bounds(square) {
                return Err(Error::OutOfBounds(square));
            }
        }
        let piece = self.board[mv.start];
        match piece.color() {
            None => return Err(Error::NoPieceAtStart(mv.start)),
            Some(color) if color != self.side_to_move => {
                return Err(Error::NotYourPiece(mv.start))
            }
            Some(_) => {}
        }
        if !self.board.moves(&piece).contains(&mv.end) {
            return Err(Error::MoveNotAvailable(mv));
        }
        if !self.board.escape_moves(&piece).contains(&mv.end) {
            return Err(Error::MovingIntoCheck);
        }
        Ok(())
    }

    /// If the given move is legal, then do it and pass the turn.
    ///
    /// Otherwise, this method returns `Err(..)` with why the move is illegal.
    pub fn make_move(&mut self, mv: Move) -> Result<()> {
        self.check_move_legality(mv)?;
        self.board.move_piece(mv.start, mv.end);
        self.side_to_move = self.side_to_move.other();
        self.half_moves += 1;
        Ok(())
    }

    /// Query whoever's turn it is to make a move
    ///
    /// The player is asked again until they come up with a legal move, which is then made.
    /// Returns `None` without asking if the game is already over, since no move would be legal.
    pub fn play_half_move(&mut self) -> Option<Move> {
        let color = self.side_to_move;
        if self.board.is_checkmate(color) {
            return None;
        }
        loop {
            let player: &mut dyn Player = match color {
                Color::White => &mut self.white_player,
                Color::Black => &mut self.black_player,
            };
            let Some(mv) = player.poll_move(&self.board, color) else {
                continue;
            };
            match self.make_move(mv) {
                Ok(()) => return Some(mv),
                Err(e) => match color {
                    Color::White => self.white_player.reject_move(mv, &e),
                    Color::Black => self.black_player.reject_move(mv, &e),
                },
            }
        }
    }

    /// Play the game until it ends, or until `max_half_moves` more moves have been made
    pub fn play_game(&mut self, max_half_moves: Option<usize>) -> GameOutcome {
        let mut remaining = max_half_moves;
        loop {
            let outcome = self.game_outcome();
            if outcome != GameOutcome::InProgress || remaining == Some(0) {
                return outcome;
            }
            let color = self.side_to_move;
            let Some(mv) = self.play_half_move() else {
                return self.game_outcome();
            };
            let status = self.board.check_status(color.other());
            println!("{} ({color}) played {mv}{status}", self.player_name(color));
            remaining = remaining.map(|n| n - 1);
        }
    }

    /// Get the state of the game right now
    ///
    /// The side to move loses as soon as none of their moves gets them out of check, whether or
    /// not they're in check at the moment.
    pub fn game_outcome(&self) -> GameOutcome {
        if self.board.is_checkmate(self.side_to_move) {
            GameOutcome::Won(self.side_to_move.other())
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn board(&self) -> &GridBoard {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The number of moves made through this backend, counting each side's moves separately
    pub fn half_moves(&self) -> usize {
        self.half_moves
    }

    pub fn player_name(&self, color: Color) -> &str {
        match color {
            Color::White => self.white_player.name(),
            Color::Black => self.black_player.name(),
        }
    }
}
