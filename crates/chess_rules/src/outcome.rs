//! Game-over detection.
//!
//! End-of-game is "a king has been captured": legality checking never forbids
//! moving into a capturable position, so the only reachable terminal state is
//! an absent king. No check, checkmate or stalemate machinery.

use crate::board::Board;
use crate::types::Color;

/// True iff at least one side's king is missing from the board.
pub fn is_game_over(board: &Board) -> bool {
    !board.has_king(Color::White) || !board.has_king(Color::Black)
}
