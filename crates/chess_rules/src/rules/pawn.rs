//! Pawn movement: no ray table, three explicit cases.
//!
//! The advance direction is derived from the piece's color and applied to the
//! move's `from` square.

use crate::board::Board;
use crate::types::{Color, Square};

/// True when a `color` pawn may move `from` -> `to` on `board`.
pub(super) fn pawn_move_allowed(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let dir = color.pawn_direction();
    let to_row = to.row() as i16;
    let from_row = from.row() as i16;
    let col_delta = to.col() as i16 - from.col() as i16;

    // Single advance onto an empty square.
    if to_row == from_row + dir as i16 && col_delta == 0 {
        return board.is_empty(to);
    }

    // Double advance, only from the starting rank, both squares empty.
    if to_row == from_row + 2 * dir as i16
        && col_delta == 0
        && from.row() == color.pawn_start_row()
    {
        let intermediate = match from.offset(dir, 0) {
            Some(sq) => sq,
            None => return false,
        };
        return board.is_empty(intermediate) && board.is_empty(to);
    }

    // Diagonal capture onto an opposing piece.
    if to_row == from_row + dir as i16 && col_delta.abs() == 1 {
        return matches!(board.piece_at(to), Some(target) if target.color != color);
    }

    false
}
