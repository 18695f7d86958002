//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - HTTP client for the Google Books API
//! - Google Books API settings

use sea_orm::DatabaseConnection;

use crate::server::config::GoogleBooksConfig;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `GoogleBooksConfig` holds a few short strings
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for calls to the Google Books API.
    ///
    /// Configured with a request timeout and without redirects.
    pub http_client: reqwest::Client,

    /// Google Books API location, key and retry budget.
    pub google_books: GoogleBooksConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `google_books` - Google Books API settings
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        google_books: GoogleBooksConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            google_books,
        }
    }
}
