//! Request/response messages for asking the engine for a move, plus the
//! background worker and the JSON-lines server that carry them.
//!
//! ```json
//! {"board": {...}, "lookaheadBudget": 2, "requestId": "search-7"}
//! {"requestId": "search-7", "move": {"from": {"x": 0, "y": 3}, "to": {"x": 0, "y": 2}}, "score": 10000.0}
//! ```

mod server;
mod worker;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::evaluate::score_to_points;
use crate::moves::Move;
use crate::search::{search, SearchConfig, SearchContext, SearchError};

pub use server::serve;
pub use worker::{RequestTracker, SearchWorker};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub board: Board,
    pub lookahead_budget: u32,
    pub request_id: String,
}

/// `move` is null when the side to move has nothing to play. Scores are in
/// points from the side to move's point of view.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub request_id: String,
    #[serde(rename = "move")]
    pub best_move: Option<Move>,
    pub score: f64,
}

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Request {request_id} failed: {source}")]
    Search {
        request_id: String,
        source: SearchError,
    },
    #[error("The search worker is gone")]
    WorkerDisconnected,
}

impl ProtocolError {
    /// The request this error answers, when there is one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            ProtocolError::Search { request_id, .. } => Some(request_id),
            _ => None,
        }
    }
}

/// Searches a private copy of the request's board.
pub fn handle_request(
    request: &SearchRequest,
    config: &SearchConfig,
) -> Result<SearchResponse, ProtocolError> {
    let mut board = request.board.clone();
    let mut context = SearchContext::new(*config);
    let result = search(&mut context, &mut board, request.lookahead_budget).map_err(|source| {
        ProtocolError::Search {
            request_id: request.request_id.clone(),
            source,
        }
    })?;

    Ok(SearchResponse {
        request_id: request.request_id.clone(),
        best_move: result.best_move,
        score: score_to_points(result.score),
    })
}
