use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use log::{debug, warn};

use crate::board::Board;
use crate::search::SearchConfig;

use super::{handle_request, ProtocolError, SearchRequest, SearchResponse};

type Reply = Result<SearchResponse, ProtocolError>;

/// Runs searches on a background thread, one request at a time, in the order
/// they were submitted. A search cannot be interrupted once started; callers
/// drop answers they no longer want with a [`RequestTracker`].
pub struct SearchWorker {
    requests: Option<Sender<SearchRequest>>,
    replies: Receiver<Reply>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    pub fn spawn(config: SearchConfig) -> Self {
        let (request_tx, request_rx) = channel::<SearchRequest>();
        let (reply_tx, reply_rx) = channel::<Reply>();

        let handle = thread::spawn(move || {
            for request in request_rx {
                debug!("worker picked up request {}", request.request_id);
                let reply = handle_request(&request, &config);
                if reply_tx.send(reply).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: Some(request_tx),
            replies: reply_rx,
            handle: Some(handle),
        }
    }

    pub fn submit(&self, request: SearchRequest) -> Result<(), ProtocolError> {
        let requests = self
            .requests
            .as_ref()
            .ok_or(ProtocolError::WorkerDisconnected)?;
        requests
            .send(request)
            .map_err(|_| ProtocolError::WorkerDisconnected)
    }

    /// Blocks until the next reply arrives.
    pub fn recv(&self) -> Result<SearchResponse, ProtocolError> {
        self.replies
            .recv()
            .map_err(|_| ProtocolError::WorkerDisconnected)?
    }

    /// The next reply if one is ready.
    pub fn try_recv(&self) -> Option<Result<SearchResponse, ProtocolError>> {
        match self.replies.try_recv() {
            Ok(reply) => Some(reply),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ProtocolError::WorkerDisconnected)),
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("search worker panicked");
            }
        }
    }
}

/// Hands out request ids and remembers the newest one, so replies to
/// superseded requests can be told apart and dropped.
#[derive(Default, Debug)]
pub struct RequestTracker {
    issued: u64,
    latest: Option<String>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.issued += 1;
        let id = format!("search-{}", self.issued);
        self.latest = Some(id.clone());
        id
    }

    /// Builds a request under a fresh id.
    pub fn request(&mut self, board: Board, lookahead_budget: u32) -> SearchRequest {
        SearchRequest {
            board,
            lookahead_budget,
            request_id: self.next_id(),
        }
    }

    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    /// Forgets the outstanding request, e.g. after an undo, so its reply is
    /// dropped when it turns up.
    pub fn invalidate(&mut self) {
        self.latest = None;
    }

    /// Passes the response through only if it answers the newest request.
    pub fn accept(&self, response: SearchResponse) -> Option<SearchResponse> {
        if self.latest() == Some(response.request_id.as_str()) {
            Some(response)
        } else {
            debug!("dropping stale response {}", response.request_id);
            None
        }
    }
}
