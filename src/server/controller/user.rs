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
        user::{RegisterUserDto, UserDto},
    },
    server::{
        error::AppError, model::user::RegisterUserParam, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
pub struct ConfirmParams {
    /// Token issued at registration
    pub token: String,
}

/// Register a new account.
///
/// The account starts disabled; the confirmation link is written to the server log.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Email and nickname
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Blank field or malformed email
/// - `409 Conflict` - Email or nickname already taken
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email or nickname already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .register(RegisterUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Confirm an email address with the token issued at registration.
#[utoipa::path(
    get,
    path = "/api/users/confirm",
    tag = USER_TAG,
    params(ConfirmParams),
    responses(
        (status = 200, description = "User enabled", body = UserDto),
        (status = 404, description = "Unknown token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_email(
    State(state): State<AppState>,
    Query(params): Query<ConfirmParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .confirm_email(&params.token)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
