//! The game session: board, turn, selection and last move in one object.
//!
//! Two clicks make a move attempt. The session is pure state - it never
//! touches the network or the display; the driver reacts to the returned
//! [`ClickOutcome`] and decides whether to sync a view or request the
//! opponent's reply from the search service.

use chess_rules::{apply_move, is_game_over, is_legal_move, AppliedMove, Board, Color, Move, Square};

/// Result of feeding one click into the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing was selected; this square is now selected.
    Selected(Square),
    /// The selected square was clicked again; selection cleared.
    Deselected,
    /// The attempted move was illegal; selection moved to the new square.
    Reselected(Square),
    /// A legal move was applied. When `game_over` is false the driver is
    /// expected to request the opponent's reply move.
    Moved {
        from: Square,
        to: Square,
        game_over: bool,
    },
}

/// One game in progress. Created at game start (or reset) from the standard
/// initial configuration with White to move; board and turn mutate only
/// through the move executor.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    turn: Color,
    selection: Option<Square>,
    last_move: Option<Move>,
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

impl GameSession {
    /// Fresh standard board, White to move, nothing selected.
    pub fn new() -> Self {
        GameSession {
            board: Board::standard(),
            turn: Color::White,
            selection: None,
            last_move: None,
        }
    }

    /// Full reset: fresh board, White to move, selection and last-move
    /// highlight cleared. Which side the human plays is the driver's
    /// business - starting as Black just means the first search request goes
    /// out immediately.
    pub fn reset(&mut self) {
        *self = GameSession::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// True once either king has been captured.
    pub fn is_over(&self) -> bool {
        is_game_over(&self.board)
    }

    /// Feed one click into the selection state machine.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        match self.selection {
            None => {
                self.selection = Some(square);
                ClickOutcome::Selected(square)
            }
            Some(selected) if selected == square => {
                self.selection = None;
                ClickOutcome::Deselected
            }
            Some(selected) => {
                if is_legal_move(&self.board, self.turn, selected, square) {
                    self.selection = None;
                    self.apply_trusted(Move::new(selected, square));
                    ClickOutcome::Moved {
                        from: selected,
                        to: square,
                        game_over: self.is_over(),
                    }
                } else {
                    self.selection = Some(square);
                    ClickOutcome::Reselected(square)
                }
            }
        }
    }

    /// Apply a move that is already validated (a legal human move) or
    /// trusted (a solver reply), updating the last-move highlight.
    pub fn apply_trusted(&mut self, mv: Move) -> AppliedMove {
        let applied = apply_move(&mut self.board, &mut self.turn, mv.from, mv.to);
        self.last_move = Some(mv);
        applied
    }
}
