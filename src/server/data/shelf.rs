//! Shelf entry repository.
//!
//! A book appears on a given shelf at most once; `add` is idempotent.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::book::{Shelf, ShelfEntry},
};

pub struct ShelfRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShelfRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the entry placing a book on a shelf.
    ///
    /// # Returns
    /// - `Ok(Some(ShelfEntry))` - The book is on the shelf
    /// - `Ok(None)` - The book is not on the shelf
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - Stored shelf name not recognized
    pub async fn find(&self, book_id: i32, shelf: Shelf) -> Result<Option<ShelfEntry>, AppError> {
        let entity = entity::prelude::BookShelf::find()
            .filter(entity::book_shelf::Column::BookId.eq(book_id))
            .filter(entity::book_shelf::Column::Shelf.eq(shelf.as_str()))
            .one(self.db)
            .await?;

        Ok(entity.map(ShelfEntry::from_entity).transpose()?)
    }

    /// Places a book on a shelf unless it is already there.
    ///
    /// # Arguments
    /// - `book_id` - Id of a stored book
    /// - `shelf` - Target shelf
    ///
    /// # Returns
    /// - `Ok(ShelfEntry)` - The existing or newly created entry
    /// - `Err(AppError::DbErr)` - Database error (e.g. unknown book id)
    pub async fn add(&self, book_id: i32, shelf: Shelf) -> Result<ShelfEntry, AppError> {
        if let Some(existing) = self.find(book_id, shelf).await? {
            return Ok(existing);
        }

        let entity = entity::book_shelf::ActiveModel {
            book_id: ActiveValue::Set(book_id),
            shelf: ActiveValue::Set(shelf.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ShelfEntry::from_entity(entity)?)
    }

    /// Lists the shelves a book is on, oldest entry first.
    ///
    /// # Returns
    /// - `Ok(Vec<ShelfEntry>)` - Entries of the book (empty if none)
    /// - `Err(AppError)` - Database error or unrecognized stored shelf
    pub async fn get_by_book(&self, book_id: i32) -> Result<Vec<ShelfEntry>, AppError> {
        let entities = entity::prelude::BookShelf::find()
            .filter(entity::book_shelf::Column::BookId.eq(book_id))
            .order_by_asc(entity::book_shelf::Column::Id)
            .all(self.db)
            .await?;

        let entries = entities
            .into_iter()
            .map(ShelfEntry::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}
