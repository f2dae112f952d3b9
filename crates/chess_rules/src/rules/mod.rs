//! Move legality.
//!
//! One entry point, [`is_legal_move`], selecting between two algorithms by
//! piece kind: ray casting over the fixed direction tables for king, queen,
//! rook, knight and bishop, and the explicit pawn cases.

mod pawn;
mod tables;

use crate::board::Board;
use crate::types::{Color, PieceKind, Square};
use tables::{Ray, BISHOP_RAYS, KING_RAYS, KNIGHT_RAYS, QUEEN_RAYS, ROOK_RAYS};

fn rays_for(kind: PieceKind) -> &'static [Ray] {
    match kind {
        PieceKind::King => &KING_RAYS,
        PieceKind::Queen => &QUEEN_RAYS,
        PieceKind::Rook => &ROOK_RAYS,
        PieceKind::Knight => &KNIGHT_RAYS,
        PieceKind::Bishop => &BISHOP_RAYS,
        // Pawns never reach the ray walk; see is_legal_move.
        PieceKind::Pawn => &[],
    }
}

/// True when moving `from` -> `to` is legal for the side `turn` on `board`.
///
/// Hard rejections, checked first: `from == to`, no piece at `from`, or the
/// piece at `from` does not belong to `turn`. Pawns are special-cased; every
/// other kind walks its direction table and accepts the first ray that
/// reaches `to`, where a capture is allowed only onto the opposing color and
/// any earlier occupied square halts that ray.
pub fn is_legal_move(board: &Board, turn: Color, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return false,
    };
    if piece.color != turn {
        return false;
    }

    if piece.kind == PieceKind::Pawn {
        return pawn::pawn_move_allowed(board, piece.color, from, to);
    }

    for ray in rays_for(piece.kind) {
        let mut current = from;
        for _ in 0..ray.max_steps {
            current = match current.offset(ray.d_row, ray.d_col) {
                Some(square) => square,
                None => break,
            };
            if current == to {
                return match board.piece_at(to) {
                    None => true,
                    Some(target) => target.color != piece.color,
                };
            }
            // A square occupied before the target blocks the rest of the ray.
            if !board.is_empty(current) {
                break;
            }
        }
    }

    false
}
