//! Error types for the rules crate.

use thiserror::Error;

/// Errors produced by fallible rules-crate constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinates outside the 8x8 grid.
    #[error("invalid square ({row},{col}): coordinates must be in 0..=7")]
    InvalidSquare { row: i16, col: i16 },
}

/// Result type alias for rules-crate operations.
pub type RulesResult<T> = Result<T, RulesError>;
