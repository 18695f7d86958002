//! Email confirmation token domain model.

use chrono::{DateTime, Utc};

/// One-time token confirming a user's email address.
///
/// Tokens are 32 random alphanumeric characters and never expire.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationToken {
    pub id: i32,
    pub token: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

impl ConfirmationToken {
    pub fn from_entity(entity: entity::confirmation_token::Model) -> Self {
        Self {
            id: entity.id,
            token: entity.token,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }
}
