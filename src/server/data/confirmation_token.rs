//! Email confirmation token repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::confirmation_token::ConfirmationToken;

pub struct ConfirmationTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConfirmationTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a token for a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user the token confirms
    /// - `token` - Token value
    ///
    /// # Returns
    /// - `Ok(ConfirmationToken)` - The stored token
    /// - `Err(DbErr)` - Database error during insert (the user already has a token, or the
    ///   value collides with another token)
    pub async fn create(&self, user_id: i32, token: String) -> Result<ConfirmationToken, DbErr> {
        let entity = entity::confirmation_token::ActiveModel {
            token: ActiveValue::Set(token),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ConfirmationToken::from_entity(entity))
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<ConfirmationToken>, DbErr> {
        let entity = entity::prelude::ConfirmationToken::find()
            .filter(entity::confirmation_token::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(ConfirmationToken::from_entity))
    }

    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<ConfirmationToken>, DbErr> {
        let entity = entity::prelude::ConfirmationToken::find()
            .filter(entity::confirmation_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ConfirmationToken::from_entity))
    }
}
