//! Topic factory for creating test forum topics.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test topics with customizable fields.
pub struct TopicFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author_id: Option<i32>,
}

impl<'a> TopicFactory<'a> {
    /// Creates a new TopicFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Topic {id}"`
    /// - author_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TopicFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Topic {}", next_id()),
            author_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author_id(mut self, author_id: Option<i32>) -> Self {
        self.author_id = author_id;
        self
    }

    /// Builds and inserts the topic entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::topic::Model)` - Created topic entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::topic::Model, DbErr> {
        entity::topic::ActiveModel {
            title: ActiveValue::Set(self.title),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a topic without an author.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::topic::Model)` - Created topic entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_topic(db: &DatabaseConnection) -> Result<entity::topic::Model, DbErr> {
    TopicFactory::new(db).build().await
}
