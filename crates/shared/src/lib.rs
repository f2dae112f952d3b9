//! Wire protocol between the oraclechess client and the solver relay.
//!
//! The solver consumes a single-line textual goal and prints its chosen move
//! as a small term; this crate owns both directions so the client and any
//! server-side tooling agree on the vocabulary.

pub mod wire;

pub use wire::{decode_reply, encode_request, WireError, SEARCH_GOAL, OUTPUT_VARIABLE};
