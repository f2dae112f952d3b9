//! Board-game rules for the oraclechess client and its solver protocol.
//!
//! The crate is pure state: no I/O, no async, no globals. Legality checking,
//! move execution and game-over detection are free functions over [`Board`]
//! so that the interaction layer and the solver reply handler go through the
//! exact same transitions.
//!
//! ## Module organization
//!
//! - `types` - value types (colors, piece kinds, squares, moves)
//! - `board` - the 8x8 grid, standard setup, piece queries
//! - `rules` - move legality (ray casting plus pawn special cases)
//! - `apply` - move execution (capture, promotion, turn flip)
//! - `outcome` - king-presence game-over scan
//! - `error` - typed errors for fallible constructors

pub mod apply;
pub mod board;
pub mod error;
pub mod outcome;
pub mod rules;
pub mod types;

pub use apply::{apply_move, AppliedMove};
pub use board::Board;
pub use error::{RulesError, RulesResult};
pub use outcome::is_game_over;
pub use rules::is_legal_move;
pub use types::{Color, Move, Piece, PieceKind, Square};
