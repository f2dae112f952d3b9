//! Search client: one WebSocket channel per move request.
//!
//! The exchange is strictly request/reply: connect, send the encoded goal,
//! wait for exactly one text frame, close. A reply therefore always
//! correlates with the one outstanding request; there is no pipelining to
//! reorder. The whole exchange runs under a timeout so a dead solver stalls
//! a move, not the game.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use thiserror::Error;
use tracing::debug;
use websocket::{ClientBuilder, Message};

use chess_rules::{Board, Color, Move};
use shared::{decode_reply, encode_request, WireError};

/// Failures of one search exchange. All of them abandon the request; none
/// retry.
#[derive(Error, Debug)]
pub enum SearchError {
    /// No reply arrived within the configured window.
    #[error("no solver reply within {0:?}")]
    Timeout(Duration),

    /// The server URL did not parse.
    #[error("invalid search server url {url:?}")]
    BadUrl { url: String },

    /// Connecting, sending or receiving failed.
    #[error("search channel error: {0}")]
    Transport(#[from] websocket::Error),

    /// The channel closed before any text frame arrived (e.g. the solver
    /// process failed server-side).
    #[error("search channel closed without a reply")]
    ClosedWithoutReply,

    /// The reply arrived but did not match the move grammar.
    #[error(transparent)]
    MalformedReply(#[from] WireError),
}

/// Client side of the search protocol.
#[derive(Clone, Debug)]
pub struct SearchClient {
    url: String,
    depth: u32,
    timeout: Duration,
}

impl SearchClient {
    pub fn new(url: impl Into<String>, depth: u32, timeout: Duration) -> Self {
        SearchClient {
            url: url.into(),
            depth,
            timeout,
        }
    }

    /// Ask the search service for the side-to-move's best move.
    ///
    /// Serializes the whole position, performs one request/reply exchange
    /// and decodes the answer to a 0-based move. The caller applies it; the
    /// external service is trusted, so legality is not re-checked.
    pub async fn request_move(&self, board: &Board, turn: Color) -> Result<Move, SearchError> {
        let goal = encode_request(board, turn, self.depth);
        debug!(%goal, "search request");

        let reply = tokio::time::timeout(self.timeout, self.exchange(goal))
            .await
            .map_err(|_| SearchError::Timeout(self.timeout))??;

        debug!(reply = %reply.trim(), "search reply");
        Ok(decode_reply(&reply)?)
    }

    /// Open the channel, send the goal, wait for the single text reply and
    /// close.
    async fn exchange(&self, goal: String) -> Result<String, SearchError> {
        let builder = ClientBuilder::new()
            .uri(&self.url)
            .map_err(|_| SearchError::BadUrl {
                url: self.url.clone(),
            })?;
        let (mut channel, _) = builder.connect().await?;

        channel.send(Message::text(goal)).await?;

        let mut reply = None;
        while let Some(item) = channel.next().await {
            let message = item?;
            if let Some(text) = message.as_text() {
                reply = Some(text.to_owned());
                break;
            }
            if message.is_close() {
                break;
            }
        }
        let _ = SinkExt::close(&mut channel).await;

        reply.ok_or(SearchError::ClosedWithoutReply)
    }
}
