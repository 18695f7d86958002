//! User data repository for database operations.
//!
//! Emails are stored normalized (see `normalize_email`), so every email lookup here
//! normalizes its argument first and plain equality is case-insensitive.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{normalize_email, RegisterUserParam, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a disabled user account.
    ///
    /// # Arguments
    /// - `param` - Email and nickname; the email is normalized before storage
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert (including unique violations)
    pub async fn create(&self, param: RegisterUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(normalize_email(&param.email)),
            nickname: ActiveValue::Set(param.nickname),
            enabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by the exact stored email.
    ///
    /// # Arguments
    /// - `email` - Email compared byte for byte with the stored value
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email ignoring case and surrounding whitespace.
    ///
    /// # Arguments
    /// - `email` - Email in any case
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email_ignore_case(&self, email: &str) -> Result<Option<User>, DbErr> {
        self.find_by_email(&normalize_email(email)).await
    }

    /// Checks whether an email is already registered, ignoring case.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a nickname is already taken.
    pub async fn exists_by_nickname(&self, nickname: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.eq(nickname))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets the enabled flag of a user.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `enabled` - New flag value
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_enabled(&self, id: i32, enabled: bool) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.enabled = ActiveValue::Set(enabled);
        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }
}
