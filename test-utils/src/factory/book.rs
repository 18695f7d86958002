//! Book factory for creating test book entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let book = BookFactory::new(&db)
///     .title("Solaris")
///     .author(Some("Stanisław Lem"))
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    external_id: Option<String>,
    title: String,
    author: Option<String>,
    year: i32,
    description: Option<String>,
    pages: Option<i32>,
    rating: f64,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - external_id: `None`
    /// - title: `"Book {id}"`
    /// - author: `"Author {id}"`
    /// - year: `1970`
    /// - description, pages: `None`
    /// - rating: `0.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BookFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            external_id: None,
            title: format!("Book {}", id),
            author: Some(format!("Author {}", id)),
            year: 1970,
            description: None,
            pages: None,
            rating: 0.0,
        }
    }

    pub fn external_id(mut self, external_id: Option<&str>) -> Self {
        self.external_id = external_id.map(str::to_string);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: Option<&str>) -> Self {
        self.author = author.map(str::to_string);
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub fn pages(mut self, pages: Option<i32>) -> Self {
        self.pages = pages;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            external_id: ActiveValue::Set(self.external_id),
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            year: ActiveValue::Set(self.year),
            description: ActiveValue::Set(self.description),
            picture_url: ActiveValue::Set(None),
            pages: ActiveValue::Set(self.pages),
            rating: ActiveValue::Set(self.rating),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::book::Model)` - Created book entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}

/// Creates a book with the given title and default values otherwise.
///
/// # Arguments
/// - `db` - Database connection
/// - `title` - Title of the book
///
/// # Returns
/// - `Ok(entity::book::Model)` - Created book entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_book_with_title(
    db: &DatabaseConnection,
    title: impl Into<String>,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).title(title).build().await
}
