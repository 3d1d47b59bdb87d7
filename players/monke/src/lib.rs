//! A player which makes purely random moves

use board::{Color, Move};
use grid::GridBoard;

use rand::{rngs::SmallRng, seq::IteratorRandom, SeedableRng};

/// A player which makes purely random moves
///
/// It won't leave its own King in check if it can help it, but that's as clever as it gets.
///
/// The name is pronounced like "Monkey"
#[derive(Debug)]
pub struct MonkePlayer {
    /// How we decide what to do
    rng: SmallRng,
}

impl MonkePlayer {
    /// Create a new player seeded from the OS
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a new player which makes the same moves every time
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl players::Player for MonkePlayer {
    fn name(&self) -> &str {
        "Monke"
    }

    fn poll_move(&mut self, board: &GridBoard, color: Color) -> Option<Move> {
        board
            .pieces(color)
            .iter()
            .flat_map(|piece| {
                board
                    .escape_moves(piece)
                    .into_iter()
                    .map(|target| Move::new(piece.position(), target))
            })
            .choose(&mut self.rng)
    }
}

impl Default for MonkePlayer {
    fn default() -> Self {
        Self::new()
    }
}
