//! Error types for the solver relay.

use thiserror::Error;

/// Errors from running a one-shot solver process.
#[derive(Error, Debug)]
pub enum SolverError {
    /// The solver executable could not be started at all.
    #[error("failed to spawn solver {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully.
    #[error("solver exited with {status}: {stderr}")]
    Failed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The process exited cleanly without printing anything.
    #[error("solver produced no output")]
    EmptyReply,
}
