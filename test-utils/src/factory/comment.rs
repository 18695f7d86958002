//! Comment factory for creating test forum comments.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let comment = CommentFactory::new(&db, topic.id, user.id)
///     .status("VERIFIED")
///     .created_at(Utc::now() - Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    topic_id: i32,
    author_id: i32,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - message: `"Comment {id}"`
    /// - status: `"UNVERIFIED"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `topic_id` - Topic the comment belongs to
    /// - `author_id` - User who wrote the comment
    ///
    /// # Returns
    /// - `CommentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, topic_id: i32, author_id: i32) -> Self {
        Self {
            db,
            topic_id,
            author_id,
            message: format!("Comment {}", next_id()),
            status: "UNVERIFIED".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the stored moderation status, e.g. `"REPORTED"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            message: ActiveValue::Set(self.message),
            status: ActiveValue::Set(self.status),
            topic_id: ActiveValue::Set(self.topic_id),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unverified comment with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `topic_id` - Topic the comment belongs to
/// - `author_id` - User who wrote the comment
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    topic_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, topic_id, author_id).build().await
}
