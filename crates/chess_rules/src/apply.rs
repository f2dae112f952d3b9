//! Move execution.
//!
//! [`apply_move`] assumes the caller has already confirmed legality via
//! [`crate::rules::is_legal_move`]; it does not re-validate. Both call sites
//! (the human interaction layer and the solver reply handler) go through this
//! one transition.

use crate::board::Board;
use crate::types::{Color, Piece, PieceKind, Square};

/// What a move did, for presentation sync and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    /// Piece removed from the destination square, if the move captured.
    pub captured: Option<Piece>,
    /// True when a pawn reached the far rank and became a queen.
    pub promoted: bool,
}

/// Apply a validated move: capture whatever sits on `to`, relocate the piece
/// from `from`, promote a pawn reaching the opposite back rank to a queen,
/// and flip `turn` unconditionally.
pub fn apply_move(board: &mut Board, turn: &mut Color, from: Square, to: Square) -> AppliedMove {
    let captured = board.take(to);
    let mut promoted = false;

    if let Some(mut piece) = board.take(from) {
        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            piece.kind = PieceKind::Queen;
            promoted = true;
        }
        board.set(to, Some(piece));
    }

    *turn = turn.opponent();
    AppliedMove { captured, promoted }
}
