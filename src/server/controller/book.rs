use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        book::{BookDto, ShelfEntryDto},
    },
    server::{
        error::AppError,
        model::book::{Book, Shelf},
        service::{book::BookService, google_books::GoogleBooksService},
        state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

/// Optional exact-match filters for the book listing.
#[derive(Deserialize, IntoParams)]
pub struct BookFilterParams {
    /// Exact author name
    pub author: Option<String>,
    /// Exact title
    pub title: Option<String>,
}

/// Parameters of a Google Books search.
#[derive(Deserialize, IntoParams)]
pub struct SearchParams {
    /// Provider search field, e.g. `intitle` or `inauthor`
    pub criteria: Option<String>,
    /// Search phrase
    pub query: Option<String>,
}

fn book_service(state: &AppState) -> BookService<'_> {
    BookService::new(
        &state.db,
        GoogleBooksService::new(&state.http_client, &state.google_books),
    )
}

fn into_dtos(books: Vec<Book>) -> Vec<BookDto> {
    books.into_iter().map(Book::into_dto).collect()
}

/// Get a stored book by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Internal book id
///
/// # Returns
/// - `200 OK` - The book
/// - `404 Not Found` - No stored book with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Internal book id")
    ),
    responses(
        (status = 200, description = "Book found", body = BookDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let book = book_service(&state)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

    Ok((StatusCode::OK, Json(book.into_dto())))
}

/// List stored books.
///
/// Without filters returns the first 20 books sorted by title. With `author` or `title`
/// returns every book matching exactly; `author` wins when both are given.
///
/// # Returns
/// - `200 OK` - List of books
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/books",
    tag = BOOK_TAG,
    params(BookFilterParams),
    responses(
        (status = 200, description = "Books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(
    State(state): State<AppState>,
    Query(params): Query<BookFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = book_service(&state);

    let books = match (params.author, params.title) {
        (Some(author), _) => service.get_books_by_author(&author).await?,
        (None, Some(title)) => service.get_books_by_title(&title).await?,
        (None, None) => service.get_all_books().await?,
    };

    Ok((StatusCode::OK, Json(into_dtos(books))))
}

/// Get the four featured books.
#[utoipa::path(
    get,
    path = "/api/books/featured",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "Featured books", body = Vec<BookDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_featured_books(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let books = book_service(&state).find_featured_books().await?;

    Ok((StatusCode::OK, Json(into_dtos(books))))
}

/// Search Google Books.
///
/// Only Polish volumes are returned. A search with neither criteria nor query returns an
/// empty list without contacting the provider.
///
/// # Arguments
/// - `state` - Application state containing the HTTP client and provider settings
/// - `params` - Search field and phrase
///
/// # Returns
/// - `200 OK` - Matching books, without internal ids
/// - `404 Not Found` - Provider answered 404
/// - `502 Bad Gateway` - Provider failed or timed out
#[utoipa::path(
    get,
    path = "/api/books/search",
    tag = BOOK_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching books", body = Vec<BookDto>),
        (status = 404, description = "Provider reported not found", body = ErrorDto),
        (status = 502, description = "Provider request failed", body = ErrorDto)
    ),
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let books = book_service(&state)
        .search_books(params.criteria.as_deref(), params.query.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(books))))
}

/// Get a single Google Books volume.
///
/// # Returns
/// - `200 OK` - The book, without an internal id
/// - `404 Not Found` - Unknown volume id
/// - `502 Bad Gateway` - Provider failed or timed out
#[utoipa::path(
    get,
    path = "/api/books/search/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = String, Path, description = "Google Books volume id")
    ),
    responses(
        (status = 200, description = "Book found", body = BookDto),
        (status = 404, description = "Volume not found", body = ErrorDto),
        (status = 502, description = "Provider request failed", body = ErrorDto)
    ),
)]
pub async fn get_external_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let book = book_service(&state).get_book_by_external_id(&id).await?;

    Ok((StatusCode::OK, Json(book.into_dto())))
}

/// Rate a book.
///
/// Placeholder; the rating is accepted but not stored.
#[utoipa::path(
    post,
    path = "/api/books/{id}/rate",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Internal book id")
    ),
    request_body = i32,
    responses(
        (status = 200, description = "Fixed confirmation text", body = String)
    ),
)]
pub async fn rate_book(Path(_id): Path<i32>, Json(_rating): Json<i32>) -> impl IntoResponse {
    (StatusCode::OK, "Rate a book")
}

/// Place a book on a reading shelf.
///
/// Books not yet stored are saved first; a book already stored under the same Google Books
/// id is reused. Adding a book to a shelf it is already on returns the existing entry.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `shelf` - Shelf name: `WANT_TO_READ`, `READING` or `READ` (case-insensitive)
/// - `payload` - Book to place
///
/// # Returns
/// - `201 Created` - Shelf entry
/// - `400 Bad Request` - Unknown shelf or untitled new book
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/book/{shelf}",
    tag = BOOK_TAG,
    params(
        ("shelf" = String, Path, description = "WANT_TO_READ, READING or READ")
    ),
    request_body = BookDto,
    responses(
        (status = 201, description = "Book placed on shelf", body = ShelfEntryDto),
        (status = 400, description = "Unknown shelf or invalid book", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_book_to_shelf(
    State(state): State<AppState>,
    Path(shelf): Path<String>,
    Json(payload): Json<BookDto>,
) -> Result<impl IntoResponse, AppError> {
    let shelf = Shelf::parse(&shelf)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown shelf: {}", shelf)))?;

    let entry = book_service(&state)
        .save_book_to_shelf(Book::from_dto(payload), shelf)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}
