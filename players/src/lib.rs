//! Traits for an arbitrary player

use core::fmt;

use board::{Color, Move};
use grid::GridBoard;

/// A player in a game
///
/// This trait is generic over how the players decides what to do, so terminal and AI players can
/// both implement this.
pub trait Player {
    /// What to call this player when talking about them
    fn name(&self) -> &str;

    /// Ask for a move for `color` to make on the given board
    ///
    /// Returns `None` if the player has no move ready yet, in which case they'll be asked again.
    /// The move returned needn't be legal; the caller checks it and calls
    /// [`Player::reject_move`] if it isn't.
    fn poll_move(&mut self, board: &GridBoard, color: Color) -> Option<Move>;

    /// Tell the player their move wasn't accepted, and why
    fn reject_move(&mut self, mv: Move, reason: &dyn fmt::Display) {
        let _ = (mv, reason);
    }
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn poll_move(&mut self, board: &GridBoard, color: Color) -> Option<Move> {
        (**self).poll_move(board, color)
    }

    fn reject_move(&mut self, mv: Move, reason: &dyn fmt::Display) {
        (**self).reject_move(mv, reason)
    }
}
