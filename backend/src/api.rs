//! WebSocket endpoint: one request, one solver process, one reply.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::any,
    Router,
};
use tracing::{error, info};

use crate::solver::{run_goal, SolverConfig};

#[derive(Clone)]
pub struct AppState {
    pub solver: SolverConfig,
}

pub fn router(solver: SolverConfig) -> Router {
    Router::new()
        .route("/", any(ws_handler))
        .with_state(AppState { solver })
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.solver))
}

/// Serve a single request/reply exchange, then close the channel.
///
/// A failed solver run is logged and produces no reply; the client's timeout
/// is its recovery path.
async fn handle_socket(mut socket: WebSocket, solver: SolverConfig) {
    while let Some(Ok(message)) = socket.recv().await {
        let goal = match message {
            Message::Text(text) => text.to_string(),
            Message::Close(_) => break,
            _ => continue,
        };

        info!(%goal, "search request");
        match run_goal(&solver, &goal).await {
            Ok(reply) => {
                if let Err(err) = socket.send(Message::Text(reply.into())).await {
                    error!(%err, "failed to send solver reply");
                }
            }
            Err(err) => {
                error!(%err, "solver failed, closing without a reply");
            }
        }
        break;
    }

    let _ = socket.send(Message::Close(None)).await;
}
