//! Route table and OpenAPI document.

use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        book::{BookDto, ShelfEntryDto},
        forum::{CommentDto, CreateCommentDto, CreateTopicDto, TopicDto},
        user::{RegisterUserDto, UserDto},
    },
    server::{
        controller::{book, forum, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        book::get_book,
        book::get_books,
        book::get_featured_books,
        book::search_books,
        book::get_external_book,
        book::rate_book,
        book::save_book_to_shelf,
        forum::get_topics,
        forum::create_topic,
        forum::get_topic_comments,
        forum::create_comment,
        forum::delete_comment,
        forum::report_comment,
        forum::verify_comment,
        user::register,
        user::confirm_email,
        user::get_user,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        BookDto,
        ShelfEntryDto,
        TopicDto,
        CreateTopicDto,
        CommentDto,
        CreateCommentDto,
        UserDto,
        RegisterUserDto,
    )),
    tags(
        (name = "book", description = "Stored books, Google Books search and reading shelves"),
        (name = "forum", description = "Forum topics, comments and moderation"),
        (name = "user", description = "Registration and email confirmation"),
    ),
    info(
        title = "Book Club API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

/// Builds the API routes along with Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/books", get(book::get_books))
        .route("/api/books/featured", get(book::get_featured_books))
        .route("/api/books/search", get(book::search_books))
        .route("/api/books/search/{id}", get(book::get_external_book))
        .route("/api/books/{id}", get(book::get_book))
        .route("/api/books/{id}/rate", post(book::rate_book))
        .route("/api/book/{shelf}", post(book::save_book_to_shelf))
        .route(
            "/api/forum/topics",
            get(forum::get_topics).post(forum::create_topic),
        )
        .route(
            "/api/forum/topics/{id}/comments",
            get(forum::get_topic_comments),
        )
        .route("/api/forum/comments", post(forum::create_comment))
        .route("/api/forum/comments/{id}", delete(forum::delete_comment))
        .route("/api/forum/comments/{id}/report", post(forum::report_comment))
        .route("/api/forum/comments/{id}/verify", post(forum::verify_comment))
        .route("/api/users", post(user::register))
        .route("/api/users/confirm", get(user::confirm_email))
        .route("/api/users/{id}", get(user::get_user))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
