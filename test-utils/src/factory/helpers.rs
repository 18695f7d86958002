//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique emails,
/// nicknames, titles and tokens across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a comment along with the user and topic it belongs to.
///
/// The user authors both the topic and the comment. All entities are created
/// with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, topic, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::topic::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let topic = crate::factory::topic::TopicFactory::new(db)
        .author_id(Some(user.id))
        .build()
        .await?;
    let comment = crate::factory::comment::create_comment(db, topic.id, user.id).await?;

    Ok((user, topic, comment))
}
