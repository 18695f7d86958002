//! Google Books API schema and its mapping onto `Book`.
//!
//! Only the fields the application uses are deserialized; everything else in the provider's
//! volume resource is ignored.

use std::collections::HashSet;

use serde::Deserialize;

use crate::server::model::book::{Book, UNKNOWN_YEAR};

/// Language code of the volumes kept from search results.
pub const TARGET_LANGUAGE: &str = "pl";

/// `maxResults` sent with every search, the provider's upper limit.
pub const MAX_RESULTS: u32 = 40;

/// Formatting tags removed from provider descriptions.
const STRIPPED_TAGS: [&str; 7] = ["<p>", "</p>", "<br>", "<b>", "</b>", "<i>", "</i>"];

/// Response of `volumes?q=`. `items` is omitted by the provider when nothing matched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeList {
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

/// A single volume resource, as returned by `volumes/{id}` and inside `VolumeList`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: String,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub language: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub image_links: Option<ImageLinks>,
    pub page_count: Option<i32>,
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

/// Error body returned by the provider alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,
}

impl Volume {
    /// Whether the volume's language equals `language`, ignoring ASCII case.
    pub fn is_in_language(&self, language: &str) -> bool {
        self.volume_info
            .language
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case(language))
    }

    /// Maps the provider volume onto a remote-only `Book`.
    ///
    /// # Returns
    /// - `Book` - Book with `id` unset and `external_id` set to the volume id; the year
    ///   falls back to `UNKNOWN_YEAR`, the rating to `0.0`
    pub fn into_book(self) -> Book {
        let info = self.volume_info;

        Book {
            id: None,
            external_id: Some(self.id),
            title: info.title.unwrap_or_default(),
            author: info.authors.and_then(|authors| authors.into_iter().next()),
            year: extract_year(info.published_date.as_deref()),
            description: info.description.map(|d| strip_tags(&d)),
            picture_url: info.image_links.and_then(|links| links.thumbnail),
            pages: info.page_count,
            rating: info.average_rating.unwrap_or(0.0),
        }
    }
}

/// Turns search results into books.
///
/// Drops repeated volume ids (first occurrence wins) and volumes not in
/// `TARGET_LANGUAGE`, then maps the rest in provider order.
///
/// # Arguments
/// - `volumes` - Volumes as returned by the provider
///
/// # Returns
/// - `Vec<Book>` - Mapped books
pub fn books_from_volumes(volumes: Vec<Volume>) -> Vec<Book> {
    let mut seen = HashSet::new();

    volumes
        .into_iter()
        .filter(|volume| seen.insert(volume.id.clone()))
        .filter(|volume| volume.is_in_language(TARGET_LANGUAGE))
        .map(Volume::into_book)
        .collect()
}

/// Reads the publication year from a provider date.
///
/// Dates come as `"2007"`, `"2007-05"`, `"2007-05-01"` or occasionally free text, so the
/// first run of four ASCII digits is taken as the year.
///
/// # Arguments
/// - `published_date` - Raw `publishedDate` value
///
/// # Returns
/// - `i32` - The year, or `UNKNOWN_YEAR` when no four-digit run exists
pub fn extract_year(published_date: Option<&str>) -> i32 {
    let Some(date) = published_date else {
        return UNKNOWN_YEAR;
    };

    date.as_bytes()
        .windows(4)
        .find(|window| window.iter().all(u8::is_ascii_digit))
        .and_then(|window| std::str::from_utf8(window).ok())
        .and_then(|year| year.parse().ok())
        .unwrap_or(UNKNOWN_YEAR)
}

/// Removes the provider's formatting tags from a description.
pub fn strip_tags(description: &str) -> String {
    STRIPPED_TAGS
        .iter()
        .fold(description.to_string(), |text, tag| text.replace(tag, ""))
}
