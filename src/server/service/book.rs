//! Book catalog service.
//!
//! Serves stored books, delegates searches to Google Books and places books on reading
//! shelves, storing remote-only books on first use.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{book::BookRepository, shelf::ShelfRepository},
    error::AppError,
    model::book::{Book, Shelf, ShelfEntry},
    service::google_books::GoogleBooksService,
};

/// Size of the fixed first page returned by `get_all_books`.
const FIRST_PAGE_SIZE: u64 = 20;

/// Number of books returned by `find_featured_books`.
const FEATURED_COUNT: u64 = 4;

/// Service providing business logic for books and shelves.
pub struct BookService<'a> {
    db: &'a DatabaseConnection,
    google_books: GoogleBooksService<'a>,
}

impl<'a> BookService<'a> {
    /// Creates a new BookService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `google_books` - Client for remote book metadata
    ///
    /// # Returns
    /// - `BookService` - New service instance
    pub fn new(db: &'a DatabaseConnection, google_books: GoogleBooksService<'a>) -> Self {
        Self { db, google_books }
    }

    /// Gets a stored book by its internal id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, AppError> {
        Ok(BookRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets the first page of stored books, sorted by title.
    pub async fn get_all_books(&self) -> Result<Vec<Book>, AppError> {
        Ok(BookRepository::new(self.db)
            .get_first_page(FIRST_PAGE_SIZE)
            .await?)
    }

    pub async fn get_books_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        Ok(BookRepository::new(self.db).get_by_author(author).await?)
    }

    pub async fn get_books_by_title(&self, title: &str) -> Result<Vec<Book>, AppError> {
        Ok(BookRepository::new(self.db).get_by_title(title).await?)
    }

    /// Gets the first four stored books by id.
    pub async fn find_featured_books(&self) -> Result<Vec<Book>, AppError> {
        Ok(BookRepository::new(self.db)
            .get_featured(FEATURED_COUNT)
            .await?)
    }

    /// Searches Google Books; see `GoogleBooksService::search_books`.
    pub async fn search_books(
        &self,
        criteria: Option<&str>,
        query: Option<&str>,
    ) -> Result<Vec<Book>, AppError> {
        self.google_books.search_books(criteria, query).await
    }

    /// Fetches a single Google Books volume.
    pub async fn get_book_by_external_id(&self, external_id: &str) -> Result<Book, AppError> {
        self.google_books.get_book_by_external_id(external_id).await
    }

    /// Places a book on a shelf, storing the book first when needed.
    ///
    /// A book is reused when its `id` refers to a stored row, or when a stored row has the
    /// same `external_id`; otherwise it is inserted. Placing a book on a shelf it is already
    /// on returns the existing entry.
    ///
    /// # Arguments
    /// - `book` - Book to place, stored or remote-only
    /// - `shelf` - Target shelf
    ///
    /// # Returns
    /// - `Ok(ShelfEntry)` - The shelf entry of the stored book
    /// - `Err(AppError::BadRequest)` - The book has no title
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn save_book_to_shelf(&self, book: Book, shelf: Shelf) -> Result<ShelfEntry, AppError> {
        let stored = self.find_or_store(book).await?;
        let book_id = stored
            .id
            .ok_or_else(|| AppError::InternalError("Stored book has no id".to_string()))?;

        let entry = ShelfRepository::new(self.db).add(book_id, shelf).await?;
        tracing::debug!("Book {} placed on shelf {}", book_id, shelf.as_str());

        Ok(entry)
    }

    async fn find_or_store(&self, book: Book) -> Result<Book, AppError> {
        let repo = BookRepository::new(self.db);

        if let Some(id) = book.id {
            if let Some(existing) = repo.find_by_id(id).await? {
                return Ok(existing);
            }
        }

        if let Some(external_id) = book.external_id.as_deref() {
            if let Some(existing) = repo.find_by_external_id(external_id).await? {
                return Ok(existing);
            }
        }

        if book.title.trim().is_empty() {
            return Err(AppError::BadRequest("Book title must not be blank".to_string()));
        }

        Ok(repo.create(book).await?)
    }
}
