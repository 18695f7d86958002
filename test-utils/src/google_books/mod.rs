//! Mock Google Books server for tests.
//!
//! `MockGoogleBooks` serves canned `volumes?q=` and `volumes/{id}` responses from an axum
//! server bound to an ephemeral local port, and records every request it receives so tests
//! can assert on the query string and the number of attempts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{fixture::google_books::dune_search_response, google_books::MockGoogleBooks};
//!
//! let mock = MockGoogleBooks::builder()
//!     .search_response(dune_search_response())
//!     .start()
//!     .await?;
//!
//! // Point the adapter at mock.base_url() ...
//! assert_eq!(mock.hits(), 1);
//! ```

mod stalling;

pub use stalling::StallingServer;

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::{error::TestError, fixture::google_books::search_response};

struct MockState {
    search: Value,
    volumes: HashMap<String, Value>,
    failure_status: Option<StatusCode>,
    remaining_failures: AtomicUsize,
    requests: Mutex<Vec<String>>,
}

/// Builder configuring the canned responses of a `MockGoogleBooks` server.
pub struct MockGoogleBooksBuilder {
    search: Value,
    volumes: HashMap<String, Value>,
    failure_status: Option<StatusCode>,
    failures: usize,
}

impl MockGoogleBooksBuilder {
    /// Sets the body returned for every `volumes?q=` request.
    ///
    /// Defaults to an empty search response.
    pub fn search_response(mut self, body: Value) -> Self {
        self.search = body;
        self
    }

    /// Registers a volume served at `volumes/{id}`, keyed by its `id` field.
    ///
    /// Unknown ids answer 404 with a provider-style error body.
    pub fn volume(mut self, volume: Value) -> Self {
        let id = volume
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        self.volumes.insert(id, volume);
        self
    }

    /// Answers the first `times` requests with `status` before serving normally.
    ///
    /// # Arguments
    /// - `status` - HTTP status code of the forced failures
    /// - `times` - Number of requests to fail; use `usize::MAX` to fail every request
    pub fn fail_with(mut self, status: u16, times: usize) -> Self {
        self.failure_status = StatusCode::from_u16(status).ok();
        self.failures = times;
        self
    }

    /// Binds an ephemeral port on localhost and starts serving.
    ///
    /// # Returns
    /// - `Ok(MockGoogleBooks)` - Running server, stopped when dropped
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn start(self) -> Result<MockGoogleBooks, TestError> {
        let state = Arc::new(MockState {
            search: self.search,
            volumes: self.volumes,
            failure_status: self.failure_status,
            remaining_failures: AtomicUsize::new(self.failures),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(serve_volumes).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(MockGoogleBooks {
            base_url: format!("http://{}/", addr),
            state,
            handle,
        })
    }
}

/// Running mock of the Google Books API.
pub struct MockGoogleBooks {
    base_url: String,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockGoogleBooks {
    /// Starts configuring a new mock server.
    ///
    /// # Returns
    /// - `MockGoogleBooksBuilder` - Builder serving an empty search response by default
    pub fn builder() -> MockGoogleBooksBuilder {
        MockGoogleBooksBuilder {
            search: search_response(Vec::new()),
            volumes: HashMap::new(),
            failure_status: None,
            failures: 0,
        }
    }

    /// Base URL of the server with a trailing slash, e.g. `http://127.0.0.1:4242/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests received so far, failed ones included.
    pub fn hits(&self) -> usize {
        self.requests().len()
    }

    /// Path and query of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Drop for MockGoogleBooks {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": message,
            }
        })),
    )
        .into_response()
}

async fn serve_volumes(State(state): State<Arc<MockState>>, uri: Uri) -> Response {
    state
        .requests
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push(uri.to_string());

    if let Some(status) = state.failure_status {
        let failed = state
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return error_body(status, "Mock failure");
        }
    }

    let path = uri.path();
    if path == "/volumes" {
        return Json(state.search.clone()).into_response();
    }

    match path
        .strip_prefix("/volumes/")
        .and_then(|id| state.volumes.get(id))
    {
        Some(volume) => Json(volume.clone()).into_response(),
        None => error_body(StatusCode::NOT_FOUND, "The volume ID could not be found."),
    }
}
