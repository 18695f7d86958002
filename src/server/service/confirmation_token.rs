//! Email confirmation token issuing.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::confirmation_token::ConfirmationTokenRepository, error::AppError,
    model::confirmation_token::ConfirmationToken,
};

const TOKEN_LENGTH: usize = 32;

/// Service issuing and resolving confirmation tokens.
pub struct ConfirmationTokenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConfirmationTokenService<'a> {
    /// Creates a new ConfirmationTokenService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ConfirmationTokenService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a fresh token for a user and stores it.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user the token confirms
    ///
    /// # Returns
    /// - `Ok(ConfirmationToken)` - The stored token
    /// - `Err(AppError::DbErr)` - Database error, e.g. the user already holds a token
    pub async fn issue(&self, user_id: i32) -> Result<ConfirmationToken, AppError> {
        let token = Self::generate_token();

        Ok(ConfirmationTokenRepository::new(self.db)
            .create(user_id, token)
            .await?)
    }

    /// Resolves a token string to its stored record.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<ConfirmationToken>, AppError> {
        Ok(ConfirmationTokenRepository::new(self.db)
            .find_by_token(token)
            .await?)
    }

    /// Generates a random alphanumeric token.
    ///
    /// # Returns
    /// - `String` - A 32-character string of letters and digits
    fn generate_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory::create_user};

    #[test]
    fn generates_alphanumeric_tokens() {
        let token = ConfirmationTokenService::generate_token();

        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, ConfirmationTokenService::generate_token());
    }

    /// Tests issuing a token and resolving it again.
    ///
    /// Expected: Ok with the same user id on lookup
    #[tokio::test]
    async fn issued_token_can_be_found() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = create_user(db).await.unwrap();
        let service = ConfirmationTokenService::new(db);

        let issued = service.issue(user.id).await.unwrap();
        let found = service.find_by_token(&issued.token).await.unwrap();

        assert_eq!(found.map(|t| t.user_id), Some(user.id));
        assert!(service.find_by_token("unknown").await.unwrap().is_none());
    }
}
