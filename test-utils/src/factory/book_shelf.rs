//! Shelf entry factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Places a book on a shelf.
///
/// # Arguments
/// - `db` - Database connection
/// - `book_id` - Id of the stored book
/// - `shelf` - Stored shelf name, e.g. `"READING"`
///
/// # Returns
/// - `Ok(entity::book_shelf::Model)` - Created shelf entry
/// - `Err(DbErr)` - Database error during insert (e.g. book already on that shelf)
pub async fn create_book_shelf(
    db: &DatabaseConnection,
    book_id: i32,
    shelf: &str,
) -> Result<entity::book_shelf::Model, DbErr> {
    entity::book_shelf::ActiveModel {
        book_id: ActiveValue::Set(book_id),
        shelf: ActiveValue::Set(shelf.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
