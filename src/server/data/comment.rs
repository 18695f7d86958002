//! Forum comment data repository.
//!
//! Comments are always loaded together with their author so the author's nickname can be
//! returned alongside. Status values are stored as their uppercase names and parsed at this
//! boundary, which is why lookups return `AppError` rather than a bare `DbErr`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::comment::{Comment, CommentStatus, CreateCommentParam},
};

/// Repository providing database operations for forum comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new comment stamped with the current time.
    ///
    /// Topic and author must already exist; callers are expected to check.
    ///
    /// # Arguments
    /// - `param` - Topic, author and message of the comment
    /// - `status` - Initial moderation status
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment with its author's nickname
    /// - `Err(AppError::DbErr)` - Database error during insert or author lookup
    pub async fn create(
        &self,
        param: CreateCommentParam,
        status: CommentStatus,
    ) -> Result<Comment, AppError> {
        let entity = entity::comment::ActiveModel {
            message: ActiveValue::Set(param.message),
            status: ActiveValue::Set(status.as_str().to_string()),
            topic_id: ActiveValue::Set(param.topic_id),
            author_id: ActiveValue::Set(param.author_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity
            .find_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(entity, author)?)
    }

    /// Finds a comment by id along with its author.
    ///
    /// # Arguments
    /// - `id` - Comment id
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment found
    /// - `Ok(None)` - No comment with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - Stored status not recognized
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, AppError> {
        let result = entity::prelude::Comment::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        match result {
            Some((comment, author)) => Ok(Some(Comment::from_entity(comment, author)?)),
            None => Ok(None),
        }
    }

    /// Gets all comments of a topic, most recent first.
    ///
    /// Comments created at the same instant are ordered by id descending so the
    /// ordering is stable.
    ///
    /// # Arguments
    /// - `topic_id` - Topic id
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments of the topic (empty for unknown topics)
    /// - `Err(AppError)` - Database error or unrecognized stored status
    pub async fn get_by_topic(&self, topic_id: i32) -> Result<Vec<Comment>, AppError> {
        let results = entity::prelude::Comment::find()
            .filter(entity::comment::Column::TopicId.eq(topic_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let comments = results
            .into_iter()
            .map(|(comment, author)| Comment::from_entity(comment, author))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(comments)
    }

    /// Sets the moderation status of a comment.
    ///
    /// # Arguments
    /// - `id` - Comment id
    /// - `status` - New status
    ///
    /// # Returns
    /// - `Ok(true)` - Status written
    /// - `Ok(false)` - No comment with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_status(&self, id: i32, status: CommentStatus) -> Result<bool, AppError> {
        let result = entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(id))
            .col_expr(
                entity::comment::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves a comment from one moderation status to another.
    ///
    /// The write only happens while the comment still has status `from`, so a concurrent
    /// change of status is never overwritten.
    ///
    /// # Arguments
    /// - `id` - Comment id
    /// - `from` - Status the comment must currently have
    /// - `to` - New status
    ///
    /// # Returns
    /// - `Ok(true)` - Status written
    /// - `Ok(false)` - No comment with that id and status `from`
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn transition_status(
        &self,
        id: i32,
        from: CommentStatus,
        to: CommentStatus,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::Status.eq(from.as_str()))
            .col_expr(
                entity::comment::Column::Status,
                sea_orm::sea_query::Expr::value(to.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a comment by id.
    ///
    /// # Arguments
    /// - `id` - Comment id
    ///
    /// # Returns
    /// - `Ok(true)` - Comment deleted
    /// - `Ok(false)` - No comment with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
