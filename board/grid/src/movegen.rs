//! How each kind of piece moves
//!
//! Everything here is pseudo-legal: a piece won't move onto or through its own side's pieces or
//! off the board, but nothing checks whether the move leaves its own King in check. Castling, en
//! passant and promotion aren't supported.

use board::{BoardSquare, BoardSquareOffset, Color, Piece, PieceKind};

use crate::GridBoard;

/// All the squares the given piece can move to on the given board
pub fn pseudo_legal_moves(board: &GridBoard, piece: &Piece) -> Vec<BoardSquare> {
    let Some(color) = piece.color() else {
        return Vec::new();
    };
    let from = piece.position();
    match piece.kind() {
        PieceKind::Rook => slide(board, from, color, BoardSquareOffset::ROOK_DIRECTIONS),
        PieceKind::Bishop => slide(board, from, color, BoardSquareOffset::BISHOP_DIRECTIONS),
        // A queen is just a rook and a bishop put together
        PieceKind::Queen => slide(
            board,
            from,
            color,
            BoardSquareOffset::ROOK_DIRECTIONS
                .into_iter()
                .chain(BoardSquareOffset::BISHOP_DIRECTIONS),
        ),
        PieceKind::Knight => step(board, from, color, BoardSquareOffset::KNIGHT_MOVES),
        PieceKind::King => step(board, from, color, BoardSquareOffset::KING_MOVES),
        PieceKind::Pawn => pawn_moves(board, piece, color),
        PieceKind::Empty => Vec::new(),
    }
}

/// Whether a piece of the given color could end its move on the square
///
/// Returns `None` if it can't, `Some(true)` if it can and has to stop there (a capture), and
/// `Some(false)` if it can and could keep going.
fn landing(board: &GridBoard, square: BoardSquare, color: Color) -> Option<bool> {
    if !square.is_valid() {
        return None;
    }
    match board[square].color() {
        None => Some(false),
        Some(other) if other == color => None,
        Some(_) => Some(true),
    }
}

/// Moves for pieces which go as far as they like in a line until something's in the way
fn slide(
    board: &GridBoard,
    from: BoardSquare,
    color: Color,
    directions: impl IntoIterator<Item = BoardSquareOffset>,
) -> Vec<BoardSquare> {
    let mut moves = Vec::new();
    for offset in directions {
        let mut square = offset.offset(from);
        while let Some(capture) = landing(board, square, color) {
            moves.push(square);
            if capture {
                break;
            }
            square = offset.offset(square);
        }
    }
    moves
}

/// Moves for pieces which jump by fixed offsets
fn step(
    board: &GridBoard,
    from: BoardSquare,
    color: Color,
    offsets: impl IntoIterator<Item = BoardSquareOffset>,
) -> Vec<BoardSquare> {
    offsets
        .into_iter()
        .map(|offset| offset.offset(from))
        .filter(|square| landing(board, *square, color).is_some())
        .collect()
}

fn pawn_moves(board: &GridBoard, pawn: &Piece, color: Color) -> Vec<BoardSquare> {
    let mut moves = Vec::new();
    let from = pawn.position();
    let forward = color.forward();
    let one_step = from.offset(forward, 0);
    if one_step.is_valid() && !board.is_occupied(one_step) {
        moves.push(one_step);
        // Double step only from a pawn which hasn't moved yet, and both squares must be clear
        let two_step = one_step.offset(forward, 0);
        if !pawn.has_moved() && two_step.is_valid() && !board.is_occupied(two_step) {
            moves.push(two_step);
        }
    }
    for side in [-1, 1] {
        let capture = from.offset(forward, side);
        if capture.is_valid() && board[capture].is_color(color.other()) {
            moves.push(capture);
        }
    }
    moves
}
