//! Book Club Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the book
//! club backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, entity factories, provider fixtures and a
//! mock Google Books server.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts entities with sensible defaults
//! - **fixture**: Builds Google Books JSON payloads without a server
//! - **google_books**: `MockGoogleBooks`, an HTTP stand-in for the remote provider
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod google_books;
