//! Solver relay server.
//!
//! Accepts WebSocket connections and, for every inbound request line, spawns
//! one short-lived solver process with the request as its goal, relays the
//! process's standard output back over the channel verbatim, and closes the
//! channel. Requests are independent: one process per request, one reply per
//! process, no session state.

pub mod api;
pub mod error;
pub mod solver;

pub use api::router;
pub use error::SolverError;
pub use solver::SolverConfig;

/// Serve the relay on an already-bound listener. Used by the binary and by
/// in-process integration tests.
pub async fn serve(
    listener: tokio::net::TcpListener,
    solver: SolverConfig,
) -> std::io::Result<()> {
    axum::serve(listener, api::router(solver)).await
}
