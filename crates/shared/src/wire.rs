//! Request/reply wire formats for the solver protocol.
//!
//! A request is one line calling the search goal with four arguments: the
//! full board, the side to move, the search depth, and the output variable
//! the solver binds its answer to:
//!
//! ```text
//! best_move([[[black,rook],...,[black,rook]],...],white,2,Move)
//! ```
//!
//! The board is a list of 8 row lists, row 0 first; each row lists 8 cells,
//! column 0 first; a cell is the atom `empty` or a `[color,kind]` pair. No
//! whitespace anywhere.
//!
//! A reply is the solver's answer term, four 1-based coordinates:
//!
//! ```text
//! m(FromRow,FromCol,ToRow,ToCol).
//! ```
//!
//! Decoding is structural: functor, arity, coordinate range and the terminal
//! period are all checked, and anything else fails with
//! [`WireError::MalformedReply`] rather than being misread.

use std::fmt::Write as _;

use chess_rules::{Board, Color, Move, Square};
use thiserror::Error;

/// Goal functor the request line calls.
pub const SEARCH_GOAL: &str = "best_move";

/// Placeholder variable the solver binds the chosen move to.
pub const OUTPUT_VARIABLE: &str = "Move";

/// Errors produced while decoding a solver reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// The reply text does not match the `m(FR,FC,TR,TC).` grammar.
    #[error("malformed solver reply {reply:?}: {reason}")]
    MalformedReply { reply: String, reason: &'static str },
}

fn malformed(reply: &str, reason: &'static str) -> WireError {
    WireError::MalformedReply {
        reply: reply.to_owned(),
        reason,
    }
}

/// Serialize one search request: the whole board (row-major), the side to
/// move, and the search depth, closed with the output variable placeholder.
pub fn encode_request(board: &Board, turn: Color, depth: u32) -> String {
    // 32 occupied cells at ~14 bytes plus the empties fit comfortably.
    let mut goal = String::with_capacity(768);
    goal.push_str(SEARCH_GOAL);
    goal.push('(');
    goal.push('[');
    for row in 0..8u8 {
        if row > 0 {
            goal.push(',');
        }
        goal.push('[');
        for col in 0..8u8 {
            if col > 0 {
                goal.push(',');
            }
            match board.piece_at(Square::new(row, col)) {
                None => goal.push_str("empty"),
                Some(piece) => {
                    let _ = write!(goal, "[{},{}]", piece.color.as_str(), piece.kind.as_str());
                }
            }
        }
        goal.push(']');
    }
    goal.push(']');
    let _ = write!(goal, ",{},{},{})", turn.as_str(), depth, OUTPUT_VARIABLE);
    goal
}

/// Decode a solver reply term into a 0-based move.
///
/// The grammar is `m(FR,FC,TR,TC).` with every coordinate a decimal integer
/// in `1..=8`; surrounding whitespace is ignored. Coordinates are shifted
/// down by one, so `m(1,2,3,4).` decodes to from (0,1), to (2,3).
pub fn decode_reply(text: &str) -> Result<Move, WireError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("m(")
        .ok_or_else(|| malformed(text, "expected functor m("))?;
    let body = body
        .strip_suffix(").")
        .ok_or_else(|| malformed(text, "expected closing `).`"))?;

    let mut coords = [0u8; 4];
    let mut parts = body.split(',');
    for slot in coords.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| malformed(text, "expected four coordinates"))?;
        let value: u8 = part
            .trim()
            .parse()
            .map_err(|_| malformed(text, "coordinate is not an integer"))?;
        if !(1..=8).contains(&value) {
            return Err(malformed(text, "coordinate out of 1..=8"));
        }
        *slot = value - 1;
    }
    if parts.next().is_some() {
        return Err(malformed(text, "expected four coordinates"));
    }

    Ok(Move::new(
        Square::new(coords[0], coords[1]),
        Square::new(coords[2], coords[3]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_rules::{apply_move, Piece, PieceKind};

    const BLACK_BACK: &str = "[[black,rook],[black,knight],[black,bishop],[black,queen],\
                              [black,king],[black,bishop],[black,knight],[black,rook]]";
    const BLACK_PAWNS: &str = "[[black,pawn],[black,pawn],[black,pawn],[black,pawn],\
                               [black,pawn],[black,pawn],[black,pawn],[black,pawn]]";
    const EMPTY_ROW: &str = "[empty,empty,empty,empty,empty,empty,empty,empty]";
    const WHITE_PAWNS: &str = "[[white,pawn],[white,pawn],[white,pawn],[white,pawn],\
                               [white,pawn],[white,pawn],[white,pawn],[white,pawn]]";
    const WHITE_BACK: &str = "[[white,rook],[white,knight],[white,bishop],[white,queen],\
                              [white,king],[white,bishop],[white,knight],[white,rook]]";

    #[test]
    fn initial_request_matches_documented_format() {
        let expected = format!(
            "best_move([{BLACK_BACK},{BLACK_PAWNS},{EMPTY_ROW},{EMPTY_ROW},{EMPTY_ROW},\
             {EMPTY_ROW},{WHITE_PAWNS},{WHITE_BACK}],white,2,Move)"
        );

        assert_eq!(encode_request(&Board::standard(), Color::White, 2), expected);
    }

    #[test]
    fn request_reflects_board_and_turn() {
        let mut board = Board::standard();
        let mut turn = Color::White;
        apply_move(
            &mut board,
            &mut turn,
            Square::new(6, 4),
            Square::new(4, 4),
        );

        let goal = encode_request(&board, turn, 3);
        assert!(goal.starts_with("best_move(["));
        assert!(goal.ends_with("],black,3,Move)"));
        assert!(!goal.contains(char::is_whitespace));
        // Row 6 lost its column-4 pawn, row 4 gained it.
        assert!(goal.contains(
            "[empty,empty,empty,empty,[white,pawn],empty,empty,empty]"
        ));
        assert!(goal.contains(
            "[[white,pawn],[white,pawn],[white,pawn],[white,pawn],empty,\
             [white,pawn],[white,pawn],[white,pawn]]"
        ));
        assert_eq!(goal.matches("[white,pawn]").count(), 8);
    }

    #[test]
    fn encodes_single_piece_cell_syntax() {
        let mut board = Board::empty();
        board.set(
            Square::new(0, 0),
            Some(Piece::new(Color::White, PieceKind::Knight)),
        );
        let goal = encode_request(&board, Color::Black, 1);
        assert!(goal.starts_with("best_move([[[white,knight],empty,"));
        assert!(goal.ends_with("],black,1,Move)"));
    }

    #[test]
    fn reply_decodes_to_zero_based_move() {
        let mv = decode_reply("m(1,2,3,4).").unwrap();
        assert_eq!(mv.from, Square::new(0, 1));
        assert_eq!(mv.to, Square::new(2, 3));
    }

    #[test]
    fn reply_tolerates_surrounding_whitespace() {
        let mv = decode_reply("m(7,5,5,5).\n").unwrap();
        assert_eq!(mv.from, Square::new(6, 4));
        assert_eq!(mv.to, Square::new(4, 4));
    }

    #[test]
    fn reply_rejects_wrong_functor() {
        assert!(decode_reply("mv(1,2,3,4).").is_err());
        assert!(decode_reply("(1,2,3,4).").is_err());
    }

    #[test]
    fn reply_rejects_missing_terminator() {
        assert!(decode_reply("m(1,2,3,4)").is_err());
        assert!(decode_reply("m(1,2,3,4.").is_err());
    }

    #[test]
    fn reply_rejects_wrong_arity() {
        assert!(decode_reply("m(1,2,3).").is_err());
        assert!(decode_reply("m(1,2,3,4,5).").is_err());
    }

    #[test]
    fn reply_rejects_out_of_range_coordinates() {
        assert!(decode_reply("m(0,2,3,4).").is_err());
        assert!(decode_reply("m(1,2,9,4).").is_err());
    }

    #[test]
    fn reply_rejects_non_numeric_garbage() {
        assert!(decode_reply("").is_err());
        assert!(decode_reply("no").is_err());
        assert!(decode_reply("m(a,b,c,d).").is_err());
    }

    #[test]
    fn malformed_error_carries_the_offending_text() {
        let err = decode_reply("garbage").unwrap_err();
        let WireError::MalformedReply { reply, .. } = err;
        assert_eq!(reply, "garbage");
    }
}
