//! Forum comment service.
//!
//! Handles posting, listing and deleting comments along with the moderation flow:
//! users report comments, moderators verify them. A verified comment can no longer be
//! reported.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, topic::TopicRepository, user::UserRepository},
    error::AppError,
    model::comment::{Comment, CommentStatus, CreateCommentParam, ReportAbuseOutcome},
};

const COMMENT_NOT_FOUND: &str = "Comment with the given id does not exist.";

/// Service providing business logic for forum comments.
pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new CommentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a comment to a topic.
    ///
    /// The topic is checked first, then the author, then the message.
    ///
    /// # Arguments
    /// - `param` - Topic, author and message of the comment
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment, status `Unverified`
    /// - `Err(AppError::NotFound)` - Topic or author does not exist
    /// - `Err(AppError::BadRequest)` - Blank message
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_comment(&self, param: CreateCommentParam) -> Result<Comment, AppError> {
        if TopicRepository::new(self.db)
            .find_by_id(param.topic_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Topic not found".to_string()));
        }

        if UserRepository::new(self.db)
            .find_by_id(param.author_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if param.message.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Comment message must not be blank".to_string(),
            ));
        }

        CommentRepository::new(self.db)
            .create(param, CommentStatus::Unverified)
            .await
    }

    /// Lists the comments of a topic, most recent first.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments, empty for unknown topics
    pub async fn get_comments_for_topic(&self, topic_id: i32) -> Result<Vec<Comment>, AppError> {
        CommentRepository::new(self.db).get_by_topic(topic_id).await
    }

    /// Deletes a comment.
    ///
    /// # Returns
    /// - `Ok(true)` - Comment deleted
    /// - `Ok(false)` - No comment with that id
    pub async fn delete_comment(&self, id: i32) -> Result<bool, AppError> {
        CommentRepository::new(self.db).delete(id).await
    }

    /// Reports a comment for moderator review.
    ///
    /// Only an unverified comment is written to; reporting an already reported or verified
    /// comment leaves it untouched.
    ///
    /// # Arguments
    /// - `id` - Comment id
    ///
    /// # Returns
    /// - `Ok(ReportAbuseOutcome)` - What happened to the comment
    /// - `Err(AppError::NotFound)` - No comment with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn report_abuse(&self, id: i32) -> Result<ReportAbuseOutcome, AppError> {
        let repo = CommentRepository::new(self.db);

        let comment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))?;

        if comment.status != CommentStatus::Unverified {
            return Ok(outcome_without_write(comment.status));
        }

        if repo
            .transition_status(id, CommentStatus::Unverified, CommentStatus::Reported)
            .await?
        {
            tracing::info!("Comment {} reported for review", id);
            return Ok(ReportAbuseOutcome::Reported);
        }

        // Status changed since it was read; report against the current one.
        let current = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))?;

        Ok(outcome_without_write(current.status))
    }

    /// Marks a comment as verified by a moderator.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The comment with status `Verified`
    /// - `Err(AppError::NotFound)` - No comment with that id
    pub async fn verify_comment(&self, id: i32) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.db);

        if !repo.update_status(id, CommentStatus::Verified).await? {
            return Err(AppError::NotFound(COMMENT_NOT_FOUND.to_string()));
        }

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.to_string()))
    }
}

/// Outcome of reporting a comment that is no longer unverified.
fn outcome_without_write(status: CommentStatus) -> ReportAbuseOutcome {
    match status {
        CommentStatus::Verified => ReportAbuseOutcome::AlreadyVerified,
        CommentStatus::Reported | CommentStatus::Unverified => ReportAbuseOutcome::AlreadyReported,
    }
}
