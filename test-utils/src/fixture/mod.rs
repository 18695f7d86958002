//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT touch the database. They build the JSON payloads the
//! Google Books API returns, for feeding `MockGoogleBooks` or deserializing directly in
//! unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::google_books::{search_response, volume};
//!
//! let body = search_response(vec![
//!     volume("abc").title("Diuna").language("pl").build(),
//!     volume("def").title("Dune").language("en").build(),
//! ]);
//! ```

pub mod google_books;

pub use google_books::{search_response, volume};
