//! Forum comment domain models and moderation states.

use chrono::{DateTime, Utc};

use crate::{
    model::forum::{CommentDto, CreateCommentDto},
    server::error::internal::InternalError,
};

/// Moderation status of a comment.
///
/// New comments start `Unverified`. Reporting moves them to `Reported`; a moderator
/// verification moves any comment to `Verified`, after which it can no longer be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStatus {
    Unverified,
    Reported,
    Verified,
}

impl CommentStatus {
    /// Stored and serialized name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unverified => "UNVERIFIED",
            Self::Reported => "REPORTED",
            Self::Verified => "VERIFIED",
        }
    }

    /// Parses a stored status name.
    ///
    /// # Returns
    /// - `Ok(CommentStatus)` - Known status
    /// - `Err(InternalError::UnknownCommentStatus)` - Unrecognized stored value
    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "UNVERIFIED" => Ok(Self::Unverified),
            "REPORTED" => Ok(Self::Reported),
            "VERIFIED" => Ok(Self::Verified),
            other => Err(InternalError::UnknownCommentStatus(other.to_string())),
        }
    }
}

/// Comment with its author's nickname resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub message: String,
    pub status: CommentStatus,
    pub topic_id: i32,
    pub author_id: i32,
    /// Nickname of the author, empty if the author row is gone.
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Converts the comment domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `CommentDto` - The converted comment DTO
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            creation_time: self.created_at,
            comment_message: self.message,
            author_id: self.author_id,
            author_name: self.author_name,
            topic_id: self.topic_id,
            status: self.status.as_str().to_string(),
        }
    }

    /// Converts a comment entity and its author to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The comment entity from the database
    /// - `author` - The author's user entity, if loaded
    ///
    /// # Returns
    /// - `Ok(Comment)` - The converted comment
    /// - `Err(InternalError::UnknownCommentStatus)` - The stored status is not recognized
    pub fn from_entity(
        entity: entity::comment::Model,
        author: Option<entity::user::Model>,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            message: entity.message,
            status: CommentStatus::parse(&entity.status)?,
            topic_id: entity.topic_id,
            author_id: entity.author_id,
            author_name: author.map(|a| a.nickname).unwrap_or_default(),
            created_at: entity.created_at,
        })
    }
}

/// Parameters for posting a comment to a topic.
#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub topic_id: i32,
    pub author_id: i32,
    pub message: String,
}

impl CreateCommentParam {
    /// Converts the request DTO into creation parameters.
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self {
            topic_id: dto.topic_id,
            author_id: dto.author_id,
            message: dto.comment_message,
        }
    }
}

/// Result of reporting a comment for abuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAbuseOutcome {
    /// The comment was unverified and is now reported.
    Reported,
    /// The comment was already reported; nothing was written.
    AlreadyReported,
    /// A moderator already verified the comment; nothing was written.
    AlreadyVerified,
}

impl ReportAbuseOutcome {
    /// Message returned to the client for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Reported | Self::AlreadyReported => "Comment has been reported for review.",
            Self::AlreadyVerified => "Comment has already been verified and accepted.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names_round_trip() {
        for status in [
            CommentStatus::Unverified,
            CommentStatus::Reported,
            CommentStatus::Verified,
        ] {
            assert_eq!(CommentStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_internal_error() {
        let result = CommentStatus::parse("DELETED");

        assert!(matches!(result, Err(InternalError::UnknownCommentStatus(s)) if s == "DELETED"));
    }
}
