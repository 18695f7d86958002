//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let topic = factory::create_topic(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, topic, comment) =
//!         factory::helpers::create_comment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let comment = factory::comment::CommentFactory::new(&db, topic.id, user.id)
//!     .status("VERIFIED")
//!     .build()
//!     .await?;
//! ```

pub mod book;
pub mod book_shelf;
pub mod comment;
pub mod confirmation_token;
pub mod helpers;
pub mod topic;
pub mod user;

pub use book::create_book;
pub use book_shelf::create_book_shelf;
pub use comment::create_comment;
pub use confirmation_token::create_confirmation_token;
pub use topic::create_topic;
pub use user::create_user;
