//! User domain models and parameters.
//!
//! Accounts are created disabled and become enabled once the emailed confirmation token is
//! used. Emails are stored normalized (trimmed, lowercased) so that uniqueness is
//! case-insensitive.

use chrono::{DateTime, Utc};

use crate::model::user::{RegisterUserDto, UserDto};

/// Registered user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Normalized email address.
    pub email: String,
    pub nickname: String,
    /// Whether the email address has been confirmed.
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            nickname: self.nickname,
            enabled: self.enabled,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            nickname: entity.nickname,
            enabled: entity.enabled,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub nickname: String,
}

impl RegisterUserParam {
    /// Converts the request DTO into registration parameters.
    ///
    /// Normalizes the email and trims the nickname.
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            nickname: dto.nickname.trim().to_string(),
        }
    }
}

/// Normalizes an email address for storage and lookups: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
