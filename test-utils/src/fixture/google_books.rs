//! Google Books volume fixtures.

use serde_json::{json, Map, Value};

/// Default language of fixture volumes.
pub const DEFAULT_LANGUAGE: &str = "pl";

/// Builder for a single Google Books volume resource.
///
/// Only fields that were set (or have defaults) are written into the JSON, so
/// absent provider fields can be exercised by leaving them unset.
pub struct VolumeBuilder {
    id: String,
    title: Option<String>,
    authors: Vec<String>,
    language: Option<String>,
    published_date: Option<String>,
    description: Option<String>,
    thumbnail: Option<String>,
    page_count: Option<i32>,
    average_rating: Option<f64>,
}

/// Starts a volume with the given provider id.
///
/// # Default Values
/// - title: `"Title {id}"`
/// - language: `"pl"`
/// - every other field absent
///
/// # Arguments
/// - `id` - Provider volume id
///
/// # Returns
/// - `VolumeBuilder` - Builder instance with default values
pub fn volume(id: &str) -> VolumeBuilder {
    VolumeBuilder {
        id: id.to_string(),
        title: Some(format!("Title {}", id)),
        authors: Vec::new(),
        language: Some(DEFAULT_LANGUAGE.to_string()),
        published_date: None,
        description: None,
        thumbnail: None,
        page_count: None,
        average_rating: None,
    }
}

impl VolumeBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn no_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.authors.push(author.to_string());
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn published_date(mut self, published_date: &str) -> Self {
        self.published_date = Some(published_date.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn thumbnail(mut self, thumbnail: &str) -> Self {
        self.thumbnail = Some(thumbnail.to_string());
        self
    }

    pub fn page_count(mut self, page_count: i32) -> Self {
        self.page_count = Some(page_count);
        self
    }

    pub fn average_rating(mut self, average_rating: f64) -> Self {
        self.average_rating = Some(average_rating);
        self
    }

    /// Renders the volume as the provider would return it.
    ///
    /// # Returns
    /// - `Value` - `{"id": ..., "volumeInfo": {...}}`
    pub fn build(self) -> Value {
        let mut info = Map::new();

        if let Some(title) = self.title {
            info.insert("title".to_string(), json!(title));
        }
        if !self.authors.is_empty() {
            info.insert("authors".to_string(), json!(self.authors));
        }
        if let Some(language) = self.language {
            info.insert("language".to_string(), json!(language));
        }
        if let Some(published_date) = self.published_date {
            info.insert("publishedDate".to_string(), json!(published_date));
        }
        if let Some(description) = self.description {
            info.insert("description".to_string(), json!(description));
        }
        if let Some(thumbnail) = self.thumbnail {
            info.insert(
                "imageLinks".to_string(),
                json!({ "smallThumbnail": thumbnail, "thumbnail": thumbnail }),
            );
        }
        if let Some(page_count) = self.page_count {
            info.insert("pageCount".to_string(), json!(page_count));
        }
        if let Some(average_rating) = self.average_rating {
            info.insert("averageRating".to_string(), json!(average_rating));
        }

        json!({
            "kind": "books#volume",
            "id": self.id,
            "volumeInfo": Value::Object(info),
        })
    }
}

/// Wraps volumes in a `volumes?q=` search response.
///
/// # Arguments
/// - `items` - Volumes built with `volume(..).build()`
///
/// # Returns
/// - `Value` - `{"kind": "books#volumes", "totalItems": n, "items": [...]}`
pub fn search_response(items: Vec<Value>) -> Value {
    json!({
        "kind": "books#volumes",
        "totalItems": items.len(),
        "items": items,
    })
}

/// Search response with two Polish editions of Dune and one English one.
///
/// # Returns
/// - `Value` - Search response whose `pl` items are `dune-pl-1` and `dune-pl-2`
pub fn dune_search_response() -> Value {
    search_response(vec![
        volume("dune-pl-1")
            .title("Diuna")
            .author("Frank Herbert")
            .language("pl")
            .published_date("2007-05-01")
            .description("<p>Arrakis, <b>pustynna</b> planeta.</p>")
            .page_count(712)
            .average_rating(4.5)
            .build(),
        volume("dune-en-1")
            .title("Dune")
            .author("Frank Herbert")
            .language("en")
            .published_date("1965")
            .build(),
        volume("dune-pl-2")
            .title("Diuna. Mesjasz Diuny")
            .author("Frank Herbert")
            .language("PL")
            .published_date("circa 1985")
            .build(),
    ])
}
