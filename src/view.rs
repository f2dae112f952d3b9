//! Board-view seam.
//!
//! The render collaborator sees only a narrow surface: set/clear the piece
//! shown at a coordinate and mark/unmark the selection and last-move
//! highlights. [`sync`] replays session state into a view after every
//! mutation, keeping the pure state transition separate from presentation.

use chess_rules::{Color, Move, Piece, PieceKind, Square};

use crate::session::GameSession;

/// What a renderer must be able to display.
pub trait BoardView {
    fn set_piece(&mut self, square: Square, piece: Piece);
    fn clear_piece(&mut self, square: Square);
    fn set_selected(&mut self, square: Option<Square>);
    fn set_last_move(&mut self, mv: Option<Move>);
}

/// Replay the whole session into `view`.
pub fn sync(view: &mut impl BoardView, session: &GameSession) {
    for square in session.board().squares_iter() {
        match session.board().piece_at(square) {
            Some(piece) => view.set_piece(square, piece),
            None => view.clear_piece(square),
        }
    }
    view.set_selected(session.selection());
    view.set_last_move(session.last_move());
}

/// Plain-text renderer for the terminal driver. White pieces render as
/// uppercase letters, black as lowercase; the selected square is bracketed
/// and the last move's squares are parenthesized.
#[derive(Debug, Default)]
pub struct TerminalView {
    cells: [[Option<Piece>; 8]; 8],
    selected: Option<Square>,
    last_move: Option<Move>,
}

impl TerminalView {
    pub fn new() -> Self {
        TerminalView::default()
    }

    fn letter(piece: Piece) -> char {
        let ch = match piece.kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Pawn => 'p',
        };
        match piece.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    /// Render the grid with row/column headers.
    pub fn render(&self) -> String {
        let mut out = String::from("   0  1  2  3  4  5  6  7\n");
        for row in 0..8u8 {
            out.push_str(&format!("{row} "));
            for col in 0..8u8 {
                let square = Square::new(row, col);
                let ch = self.cells[row as usize][col as usize]
                    .map(Self::letter)
                    .unwrap_or('.');
                let (open, close) = if self.selected == Some(square) {
                    ('[', ']')
                } else if self.is_last_move_square(square) {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };
                out.push(open);
                out.push(ch);
                out.push(close);
            }
            out.push('\n');
        }
        out
    }

    fn is_last_move_square(&self, square: Square) -> bool {
        self.last_move
            .map(|mv| mv.from == square || mv.to == square)
            .unwrap_or(false)
    }
}

impl BoardView for TerminalView {
    fn set_piece(&mut self, square: Square, piece: Piece) {
        self.cells[square.row() as usize][square.col() as usize] = Some(piece);
    }

    fn clear_piece(&mut self, square: Square) {
        self.cells[square.row() as usize][square.col() as usize] = None;
    }

    fn set_selected(&mut self, square: Option<Square>) {
        self.selected = square;
    }

    fn set_last_move(&mut self, mv: Option<Move>) {
        self.last_move = mv;
    }
}
