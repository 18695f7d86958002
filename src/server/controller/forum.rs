use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        forum::{CommentDto, CreateCommentDto, CreateTopicDto, TopicDto},
    },
    server::{
        error::AppError,
        model::{
            comment::{Comment, CreateCommentParam, ReportAbuseOutcome},
            topic::{CreateTopicParam, Topic},
        },
        service::{comment::CommentService, topic::TopicService},
        state::AppState,
    },
};

/// Tag for grouping forum endpoints in OpenAPI documentation
pub static FORUM_TAG: &str = "forum";

/// List all forum topics, newest first.
#[utoipa::path(
    get,
    path = "/api/forum/topics",
    tag = FORUM_TAG,
    responses(
        (status = 200, description = "Topics", body = Vec<TopicDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let topics = TopicService::new(&state.db).get_all_topics().await?;

    let dtos: Vec<TopicDto> = topics.into_iter().map(Topic::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Open a new forum topic.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Title and optional author id
///
/// # Returns
/// - `201 Created` - The topic
/// - `400 Bad Request` - Blank title
/// - `404 Not Found` - Author does not exist
#[utoipa::path(
    post,
    path = "/api/forum/topics",
    tag = FORUM_TAG,
    request_body = CreateTopicDto,
    responses(
        (status = 201, description = "Topic created", body = TopicDto),
        (status = 400, description = "Blank title", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_topic(
    State(state): State<AppState>,
    Json(payload): Json<CreateTopicDto>,
) -> Result<impl IntoResponse, AppError> {
    let topic = TopicService::new(&state.db)
        .create_topic(CreateTopicParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(topic.into_dto())))
}

/// List the comments of a topic, most recent first.
///
/// Unknown topics yield an empty list.
#[utoipa::path(
    get,
    path = "/api/forum/topics/{id}/comments",
    tag = FORUM_TAG,
    params(
        ("id" = i32, Path, description = "Topic id")
    ),
    responses(
        (status = 200, description = "Comments of the topic", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topic_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .get_comments_for_topic(id)
        .await?;

    let dtos: Vec<CommentDto> = comments.into_iter().map(Comment::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Post a comment to a topic.
///
/// The author id travels in the body as there is no authentication.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Topic id, author id and message
///
/// # Returns
/// - `201 Created` - The comment, status `UNVERIFIED`
/// - `400 Bad Request` - Blank message
/// - `404 Not Found` - Topic or author does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/forum/comments",
    tag = FORUM_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Blank message", body = ErrorDto),
        (status = 404, description = "Topic or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .create_comment(CreateCommentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// # Returns
/// - `204 No Content` - Comment deleted
/// - `404 Not Found` - No comment with that id
#[utoipa::path(
    delete,
    path = "/api/forum/comments/{id}",
    tag = FORUM_TAG,
    params(
        ("id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !CommentService::new(&state.db).delete_comment(id).await? {
        return Err(AppError::NotFound(
            "Comment with the given id does not exist.".to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Report a comment for moderator review.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Comment id
///
/// # Returns
/// - `202 Accepted` - Comment reported, or already awaiting review
/// - `208 Already Reported` - Comment already verified by a moderator
/// - `404 Not Found` - No comment with that id
#[utoipa::path(
    post,
    path = "/api/forum/comments/{id}/report",
    tag = FORUM_TAG,
    params(
        ("id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 202, description = "Comment reported", body = MessageDto),
        (status = 208, description = "Comment already verified", body = MessageDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn report_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = CommentService::new(&state.db).report_abuse(id).await?;

    let status = match outcome {
        ReportAbuseOutcome::Reported | ReportAbuseOutcome::AlreadyReported => StatusCode::ACCEPTED,
        ReportAbuseOutcome::AlreadyVerified => StatusCode::ALREADY_REPORTED,
    };

    Ok((
        status,
        Json(MessageDto {
            message: outcome.message().to_string(),
        }),
    ))
}

/// Mark a comment as verified by a moderator.
#[utoipa::path(
    post,
    path = "/api/forum/comments/{id}/verify",
    tag = FORUM_TAG,
    params(
        ("id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment verified", body = CommentDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db).verify_comment(id).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}
