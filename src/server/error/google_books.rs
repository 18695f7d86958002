use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures talking to the Google Books API.
#[derive(Error, Debug)]
pub enum GoogleBooksError {
    /// The provider answered 404 for the requested resource.
    ///
    /// Results in 404 Not Found carrying the provider's message.
    #[error("{0}")]
    NotFound(String),

    /// Any other provider or transport failure, after retries.
    ///
    /// Results in 502 Bad Gateway carrying the provider's message.
    #[error("Google Books request failed: {0}")]
    Api(String),
}

/// Converts provider errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - 502 Bad Gateway - For `Api`, logged at warn level
impl IntoResponse for GoogleBooksError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            err @ Self::Api(_) => {
                tracing::warn!("{}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
