use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book as exposed by the API.
///
/// `id` is absent for books that only exist at the remote provider (search results).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub external_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub year: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub pages: Option<i32>,
    #[serde(default)]
    pub rating: f64,
}

/// Association of a stored book with a reading shelf.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShelfEntryDto {
    pub id: i32,
    pub book_id: i32,
    /// One of `WANT_TO_READ`, `READING`, `READ`.
    pub shelf: String,
    pub created_at: DateTime<Utc>,
}
