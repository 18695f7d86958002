//! User registration and email confirmation.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{RegisterUserParam, User},
    service::confirmation_token::ConfirmationTokenService,
};

/// Path of the endpoint confirming an email address.
const CONFIRM_PATH: &str = "/api/users/confirm";

/// Service providing business logic for user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new, not yet enabled, account and issues its confirmation token.
    ///
    /// Email delivery is not performed; the confirmation link is logged instead.
    ///
    /// # Arguments
    /// - `param` - Normalized email and trimmed nickname
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with `enabled = false`
    /// - `Err(AppError::BadRequest)` - Blank field or email without `@`
    /// - `Err(AppError::Conflict)` - Email (ignoring case) or nickname already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        if param.email.is_empty() || param.nickname.is_empty() {
            return Err(AppError::BadRequest(
                "Email and nickname must not be blank".to_string(),
            ));
        }
        if !param.email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }

        let repo = UserRepository::new(self.db);

        if repo.exists_by_email(&param.email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }
        if repo.exists_by_nickname(&param.nickname).await? {
            return Err(AppError::Conflict("Nickname is already taken".to_string()));
        }

        let user = repo.create(param).await.map_err(conflict_on_duplicate)?;
        let token = ConfirmationTokenService::new(self.db).issue(user.id).await?;

        tracing::info!(
            "Registered user {}; confirm at {}?token={}",
            user.email,
            CONFIRM_PATH,
            token.token
        );

        Ok(user)
    }

    /// Enables the account owning a confirmation token.
    ///
    /// Confirming an already enabled account succeeds again.
    ///
    /// # Returns
    /// - `Ok(User)` - The enabled user
    /// - `Err(AppError::NotFound)` - Unknown token
    pub async fn confirm_email(&self, token: &str) -> Result<User, AppError> {
        let token = ConfirmationTokenService::new(self.db)
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::NotFound("Confirmation token not found".to_string()))?;

        UserRepository::new(self.db)
            .set_enabled(token.user_id, true)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }
}

/// Maps a unique-index violation on insert to `Conflict`.
///
/// Covers a registration racing another with the same email or nickname after both passed
/// the existence checks.
fn conflict_on_duplicate(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Email or nickname is already taken".to_string())
        }
        _ => AppError::DbErr(err),
    }
}
