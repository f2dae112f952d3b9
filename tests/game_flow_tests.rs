//! Game flow integration tests.
//!
//! Drives full click sequences through the session the way the terminal
//! driver does: selection, legality, execution, promotion and game end, plus
//! the request serialization the search protocol would send at each point.

use chess_rules::{is_legal_move, Color, Move, Piece, PieceKind, Square};
use oraclechess::{ClickOutcome, GameSession};
use shared::encode_request;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

/// Two clicks that must land as a legal move.
fn must_move(session: &mut GameSession, from: Square, to: Square) -> ClickOutcome {
    session.click(from);
    let outcome = session.click(to);
    assert!(
        matches!(outcome, ClickOutcome::Moved { .. }),
        "{from} -> {to} should be a legal move, got {outcome:?}"
    );
    outcome
}

// ============================================================================
// Opening sequence (the documented end-to-end scenario)
// ============================================================================

#[test]
fn white_double_advance_then_black_has_no_phantom_captures() {
    let mut session = GameSession::new();

    must_move(&mut session, sq(6, 4), sq(4, 4));

    // Board shows the pawn on (4,4) and the turn is Black's.
    assert_eq!(
        session.board().piece_at(sq(4, 4)),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert!(session.board().is_empty(sq(6, 4)));
    assert_eq!(session.turn(), Color::Black);

    // No black pawn has a capture: every diagonal in reach is empty.
    for col in 0..8u8 {
        for d_col in [-1i8, 1] {
            if let Some(target) = sq(1, col).offset(1, d_col) {
                assert!(
                    !is_legal_move(session.board(), Color::Black, sq(1, col), target),
                    "black pawn ({},{}) has no capture at {target}",
                    1,
                    col
                );
            }
        }
    }

    // Black cannot move White's advanced pawn either.
    assert!(!is_legal_move(session.board(), Color::Black, sq(4, 4), sq(3, 4)));
}

#[test]
fn request_serialization_tracks_the_session() {
    let mut session = GameSession::new();
    let opening = encode_request(session.board(), session.turn(), 2);
    assert!(opening.starts_with("best_move([[[black,rook]"));
    assert!(opening.ends_with(",white,2,Move)"));

    must_move(&mut session, sq(6, 4), sq(4, 4));
    let reply_request = encode_request(session.board(), session.turn(), 2);
    assert!(reply_request.ends_with(",black,2,Move)"));
    assert!(reply_request.contains("[empty,empty,empty,empty,[white,pawn],empty,empty,empty]"));
}

// ============================================================================
// Selection state machine across a real exchange
// ============================================================================

#[test]
fn selection_survives_misclicks_until_a_legal_move() {
    let mut session = GameSession::new();

    assert_eq!(session.click(sq(7, 6)), ClickOutcome::Selected(sq(7, 6)));
    // Knight cannot reach (5,6); the misclick reselects.
    assert_eq!(session.click(sq(5, 6)), ClickOutcome::Reselected(sq(5, 6)));
    // (5,6) is empty, so any follow-up is illegal and keeps reselecting.
    assert_eq!(session.click(sq(7, 6)), ClickOutcome::Reselected(sq(7, 6)));
    // Deselect, then play the knight out properly.
    assert_eq!(session.click(sq(7, 6)), ClickOutcome::Deselected);
    must_move(&mut session, sq(7, 6), sq(5, 5));
    assert_eq!(session.turn(), Color::Black);
}

#[test]
fn solver_reply_alternates_with_human_moves() {
    let mut session = GameSession::new();

    // Human plays White, solver replies for Black through the same executor.
    must_move(&mut session, sq(6, 4), sq(4, 4));
    session.apply_trusted(Move::new(sq(1, 4), sq(3, 4)));
    assert_eq!(session.turn(), Color::White);
    assert_eq!(session.last_move(), Some(Move::new(sq(1, 4), sq(3, 4))));

    must_move(&mut session, sq(7, 6), sq(5, 5));
    session.apply_trusted(Move::new(sq(0, 1), sq(2, 2)));
    assert_eq!(session.turn(), Color::White);
    assert_eq!(session.board().piece_count(), 32, "no capture so far");
}

// ============================================================================
// Promotion and game end over full sequences
// ============================================================================

#[test]
fn pawn_promotes_to_queen_during_play() {
    let mut session = GameSession::new();

    // March the a-pawn up the flank; each black reply shuffles the kingside
    // knight so the pawn's path stays legal.
    must_move(&mut session, sq(6, 0), sq(4, 0));
    session.apply_trusted(Move::new(sq(1, 1), sq(3, 1)));
    must_move(&mut session, sq(4, 0), sq(3, 1)); // capture the b-pawn
    session.apply_trusted(Move::new(sq(0, 6), sq(2, 5)));
    must_move(&mut session, sq(3, 1), sq(2, 1));
    session.apply_trusted(Move::new(sq(2, 5), sq(4, 4)));
    must_move(&mut session, sq(2, 1), sq(1, 0)); // capture the a-pawn
    session.apply_trusted(Move::new(sq(4, 4), sq(2, 5)));
    let outcome = must_move(&mut session, sq(1, 0), sq(0, 1)); // take the knight and promote

    assert!(matches!(outcome, ClickOutcome::Moved { game_over: false, .. }));
    assert_eq!(
        session.board().piece_at(sq(0, 1)),
        Some(Piece::new(Color::White, PieceKind::Queen)),
        "pawn reaching row 0 must be a queen"
    );
}

#[test]
fn game_ends_when_the_king_is_captured() {
    let mut session = GameSession::new();

    must_move(&mut session, sq(6, 4), sq(4, 4));
    session.apply_trusted(Move::new(sq(1, 3), sq(3, 3)));
    must_move(&mut session, sq(7, 5), sq(3, 1));
    session.apply_trusted(Move::new(sq(1, 0), sq(2, 0)));

    session.click(sq(3, 1));
    let outcome = session.click(sq(0, 4));
    assert_eq!(
        outcome,
        ClickOutcome::Moved {
            from: sq(3, 1),
            to: sq(0, 4),
            game_over: true,
        }
    );
    assert!(session.is_over(), "black king captured");

    // A reset brings back a playable standard game.
    session.reset();
    assert!(!session.is_over());
    assert_eq!(session.turn(), Color::White);
    assert_eq!(session.board().piece_count(), 32);
}
