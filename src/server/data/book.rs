//! Book data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::book::Book;

/// Repository providing database operations for stored books.
pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    /// Creates a new BookRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a book by its internal id.
    ///
    /// # Arguments
    /// - `id` - Internal book id
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - Book found
    /// - `Ok(None)` - No book with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Book::from_entity))
    }

    /// Finds a stored book by its Google Books volume id.
    ///
    /// # Arguments
    /// - `external_id` - Provider volume id
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - The first stored book with that volume id
    /// - `Ok(None)` - Volume not stored yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Book>, DbErr> {
        let entity = entity::prelude::Book::find()
            .filter(entity::book::Column::ExternalId.eq(external_id))
            .order_by_asc(entity::book::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Book::from_entity))
    }

    /// Gets the first page of books sorted by title.
    ///
    /// # Arguments
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok(Vec<Book>)` - Up to `per_page` books, title ascending, ties by id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_first_page(&self, per_page: u64) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .order_by_asc(entity::book::Column::Title)
            .order_by_asc(entity::book::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(0)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Gets all books by an author, matched exactly, sorted by title.
    ///
    /// # Arguments
    /// - `author` - Author name
    ///
    /// # Returns
    /// - `Ok(Vec<Book>)` - Matching books (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_author(&self, author: &str) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::Author.eq(author))
            .order_by_asc(entity::book::Column::Title)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Gets all books with a title, matched exactly.
    ///
    /// # Arguments
    /// - `title` - Book title
    ///
    /// # Returns
    /// - `Ok(Vec<Book>)` - Matching books ordered by id (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_title(&self, title: &str) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::Title.eq(title))
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Gets the earliest stored books.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of books
    ///
    /// # Returns
    /// - `Ok(Vec<Book>)` - Up to `limit` books ordered by id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_featured(&self, limit: u64) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .order_by_asc(entity::book::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Book::from_entity).collect())
    }

    /// Inserts a book as a new row.
    ///
    /// Any `id` on the given book is ignored; the database assigns one.
    ///
    /// # Arguments
    /// - `book` - Book to store
    ///
    /// # Returns
    /// - `Ok(Book)` - The stored book with its new id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, book: Book) -> Result<Book, DbErr> {
        let entity = entity::book::ActiveModel {
            external_id: ActiveValue::Set(book.external_id),
            title: ActiveValue::Set(book.title),
            author: ActiveValue::Set(book.author),
            year: ActiveValue::Set(book.year),
            description: ActiveValue::Set(book.description),
            picture_url: ActiveValue::Set(book.picture_url),
            pages: ActiveValue::Set(book.pages),
            rating: ActiveValue::Set(book.rating),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }
}
