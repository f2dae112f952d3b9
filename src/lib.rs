//! oraclechess client library.
//!
//! State and protocol only - the board rules live in `chess_rules`, the wire
//! formats in `shared`, and anything visual sits behind the narrow seam in
//! [`view`].

pub mod search;
pub mod session;
pub mod view;

pub use search::{SearchClient, SearchError};
pub use session::{ClickOutcome, GameSession};
pub use view::{sync, BoardView, TerminalView};
