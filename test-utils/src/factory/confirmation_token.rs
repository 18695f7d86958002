//! Confirmation token factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a confirmation token for the given user.
///
/// The token value is `"token{id}"` padded with zeros to 32 characters, so it is
/// unique per call and has the same length as a generated token.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the user the token confirms
///
/// # Returns
/// - `Ok(entity::confirmation_token::Model)` - Created token entity
/// - `Err(DbErr)` - Database error during insert (e.g. user already has a token)
pub async fn create_confirmation_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::confirmation_token::Model, DbErr> {
    let token = format!("{:0<32}", format!("token{}", next_id()));

    entity::confirmation_token::ActiveModel {
        token: ActiveValue::Set(token),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
