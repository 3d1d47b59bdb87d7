//! Helpers for producing arbitrary positions in tests

use board::{BoardSquare, Color};
use quickcheck::{Arbitrary, Gen};

use crate::GridBoard;

/// A short random game, as a list of choices to be interpreted against whatever moves are
/// available at each turn
#[derive(Clone, Debug)]
pub(crate) struct Plies(pub Vec<u16>);

impl Arbitrary for Plies {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 9;
        Self((0..len).map(|_| u16::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

/// Play the plies using every piece's own movement rules, with no regard for check
///
/// Kings may well get captured along the way.
pub(crate) fn play_pseudo_legal(board: &mut GridBoard, plies: &Plies) {
    let mut color = Color::White;
    for choice in &plies.0 {
        let options = options_for(board, color, |board, piece| board.moves(piece));
        if let Some(&(start, end)) = options.get(*choice as usize % options.len().max(1)) {
            board.move_piece(start, end);
        }
        color = color.other();
    }
}

/// Play the plies, only ever making moves that leave the mover out of check
///
/// Stops early once the side to move has nothing left to do. Returns the side to move.
pub(crate) fn play_escaping(board: &mut GridBoard, plies: &Plies) -> Color {
    let mut color = Color::White;
    for choice in &plies.0 {
        let options = options_for(board, color, |board, piece| board.escape_moves(piece));
        let Some(&(start, end)) = options.get(*choice as usize % options.len().max(1)) else {
            break;
        };
        board.move_piece(start, end);
        color = color.other();
    }
    color
}

fn options_for(
    board: &GridBoard,
    color: Color,
    moves: impl Fn(&GridBoard, &board::Piece) -> Vec<BoardSquare>,
) -> Vec<(BoardSquare, BoardSquare)> {
    board
        .pieces(color)
        .iter()
        .flat_map(|piece| {
            moves(board, piece)
                .into_iter()
                .map(|target| (piece.position(), target))
        })
        .collect()
}
