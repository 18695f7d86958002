//! Book domain models and reading shelves.
//!
//! Books come from two places: rows stored locally and volumes fetched from Google Books.
//! Both map onto `Book`; remote-only books have no internal `id`. A stored book can be
//! placed on any of the reading shelves, at most once per shelf.

use chrono::{DateTime, Utc};

use crate::{
    model::book::{BookDto, ShelfEntryDto},
    server::error::internal::InternalError,
};

/// Year recorded when the publication year is unknown.
pub const UNKNOWN_YEAR: i32 = 1970;

/// Book metadata, either stored or fetched from the remote provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Internal id, `None` until the book is stored.
    pub id: Option<i32>,
    /// Google Books volume id.
    pub external_id: Option<String>,
    pub title: String,
    pub author: Option<String>,
    /// Publication year, `UNKNOWN_YEAR` when unknown.
    pub year: i32,
    /// Plain-text description with formatting tags removed.
    pub description: Option<String>,
    pub picture_url: Option<String>,
    pub pages: Option<i32>,
    /// Average rating, `0.0` when unrated.
    pub rating: f64,
}

impl Book {
    /// Converts the book domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `BookDto` - The converted book DTO
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            external_id: self.external_id,
            title: self.title,
            author: self.author,
            year: self.year,
            description: self.description,
            picture_url: self.picture_url,
            pages: self.pages,
            rating: self.rating,
        }
    }

    /// Converts a request DTO into a book domain model.
    ///
    /// # Arguments
    /// - `dto` - Book sent by the client
    ///
    /// # Returns
    /// - `Book` - Domain model carrying the same values
    pub fn from_dto(dto: BookDto) -> Self {
        Self {
            id: dto.id,
            external_id: dto.external_id,
            title: dto.title,
            author: dto.author,
            year: dto.year,
            description: dto.description,
            picture_url: dto.picture_url,
            pages: dto.pages,
            rating: dto.rating,
        }
    }

    /// Converts an entity model to a book domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Book` - The converted book domain model with `id` set
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: Some(entity.id),
            external_id: entity.external_id,
            title: entity.title,
            author: entity.author,
            year: entity.year,
            description: entity.description,
            picture_url: entity.picture_url,
            pages: entity.pages,
            rating: entity.rating,
        }
    }
}

/// Reading shelf a stored book can be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    WantToRead,
    Reading,
    Read,
}

impl Shelf {
    /// Stored and serialized name of the shelf.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WantToRead => "WANT_TO_READ",
            Self::Reading => "READING",
            Self::Read => "READ",
        }
    }

    /// Parses a shelf name, ignoring ASCII case.
    ///
    /// # Arguments
    /// - `value` - Shelf name such as `"READING"` or `"want_to_read"`
    ///
    /// # Returns
    /// - `Some(Shelf)` - Known shelf
    /// - `None` - Unknown shelf name
    pub fn parse(value: &str) -> Option<Self> {
        [Self::WantToRead, Self::Reading, Self::Read]
            .into_iter()
            .find(|shelf| shelf.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// A stored book placed on a shelf.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfEntry {
    pub id: i32,
    pub book_id: i32,
    pub shelf: Shelf,
    pub created_at: DateTime<Utc>,
}

impl ShelfEntry {
    /// Converts the shelf entry to a DTO for API responses.
    ///
    /// # Returns
    /// - `ShelfEntryDto` - The converted DTO with the shelf as its stored name
    pub fn into_dto(self) -> ShelfEntryDto {
        ShelfEntryDto {
            id: self.id,
            book_id: self.book_id,
            shelf: self.shelf.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a shelf entry at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(ShelfEntry)` - The converted shelf entry
    /// - `Err(InternalError::UnknownShelf)` - The stored shelf name is not recognized
    pub fn from_entity(entity: entity::book_shelf::Model) -> Result<Self, InternalError> {
        let shelf =
            Shelf::parse(&entity.shelf).ok_or(InternalError::UnknownShelf(entity.shelf))?;

        Ok(Self {
            id: entity.id,
            book_id: entity.book_id,
            shelf,
            created_at: entity.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shelf_names_case_insensitively() {
        assert_eq!(Shelf::parse("WANT_TO_READ"), Some(Shelf::WantToRead));
        assert_eq!(Shelf::parse("reading"), Some(Shelf::Reading));
        assert_eq!(Shelf::parse("Read"), Some(Shelf::Read));
        assert_eq!(Shelf::parse("FAVOURITES"), None);
    }

    #[test]
    fn rejects_unknown_stored_shelf() {
        let entity = entity::book_shelf::Model {
            id: 1,
            book_id: 1,
            shelf: "LOST".to_string(),
            created_at: Utc::now(),
        };

        let result = ShelfEntry::from_entity(entity);

        assert!(matches!(result, Err(InternalError::UnknownShelf(s)) if s == "LOST"));
    }
}
