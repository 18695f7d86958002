//! Google Books API client.
//!
//! Searches volumes and fetches single volumes, mapping them onto `Book`. Every request is
//! bounded by the HTTP client's timeout. Transient failures (timeouts, connection errors and
//! 5xx responses) are retried after a short fixed delay, up to the configured retry budget;
//! 404 and other 4xx responses are returned immediately.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::server::{
    config::GoogleBooksConfig,
    error::{google_books::GoogleBooksError, AppError},
    model::{
        book::Book,
        google_books::{books_from_volumes, ErrorResponse, Volume, VolumeList, MAX_RESULTS},
    },
};

/// Pause between a transient failure and the next attempt.
const RETRY_DELAY: Duration = Duration::from_millis(250);

/// Outcome of a single failed attempt.
enum AttemptError {
    /// Worth retrying: timeout, connection failure or 5xx.
    Transient(String),
    /// Returned to the caller as is.
    Fatal(GoogleBooksError),
}

/// Client for the Google Books v1 API.
pub struct GoogleBooksService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a GoogleBooksConfig,
}

impl<'a> GoogleBooksService<'a> {
    /// Creates a new GoogleBooksService instance.
    ///
    /// # Arguments
    /// - `http_client` - HTTP client configured with the request timeout
    /// - `config` - API location, key and retry budget
    ///
    /// # Returns
    /// - `GoogleBooksService` - New service instance
    pub fn new(http_client: &'a reqwest::Client, config: &'a GoogleBooksConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Searches the provider for books.
    ///
    /// When both `criteria` and `query` are blank no request is made. Otherwise the search
    /// expression is `criteria:"query"` (just `"query"` without criteria, empty without a
    /// query). Results are deduplicated by volume id, filtered to Polish and mapped.
    ///
    /// # Arguments
    /// - `criteria` - Provider search field such as `intitle` or `inauthor`
    /// - `query` - Search phrase
    ///
    /// # Returns
    /// - `Ok(Vec<Book>)` - Matching Polish books (empty when nothing matched)
    /// - `Err(AppError::GoogleBooksErr(NotFound))` - Provider answered 404
    /// - `Err(AppError::GoogleBooksErr(Api))` - Any other provider or transport failure
    pub async fn search_books(
        &self,
        criteria: Option<&str>,
        query: Option<&str>,
    ) -> Result<Vec<Book>, AppError> {
        let criteria = non_blank(criteria);
        let query = non_blank(query);

        if criteria.is_none() && query.is_none() {
            return Ok(Vec::new());
        }

        let q = search_expression(criteria, query);
        tracing::debug!("Searching Google Books for {}", q);

        let mut url = self.endpoint(&["volumes"])?;
        url.query_pairs_mut()
            .append_pair("q", &q)
            .append_pair("maxResults", &MAX_RESULTS.to_string());
        self.append_key(&mut url);

        let list: VolumeList = self.fetch(url).await?;

        Ok(books_from_volumes(list.items.unwrap_or_default()))
    }

    /// Fetches a single volume by its provider id.
    ///
    /// No language filter is applied to single volumes.
    ///
    /// # Arguments
    /// - `external_id` - Provider volume id
    ///
    /// # Returns
    /// - `Ok(Book)` - The mapped volume
    /// - `Err(AppError::GoogleBooksErr(NotFound))` - No volume with that id
    /// - `Err(AppError::GoogleBooksErr(Api))` - Any other provider or transport failure
    pub async fn get_book_by_external_id(&self, external_id: &str) -> Result<Book, AppError> {
        let mut url = self.endpoint(&["volumes", external_id])?;
        self.append_key(&mut url);

        let volume: Volume = self.fetch(url).await?;

        Ok(volume.into_book())
    }

    /// Builds an API URL by appending path segments to the configured base.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GoogleBooksError> {
        let mut url = Url::parse(&self.config.api_url)
            .map_err(|e| GoogleBooksError::Api(format!("invalid API URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| GoogleBooksError::Api("API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn append_key(&self, url: &mut Url) {
        if !self.config.api_key.is_empty() {
            url.query_pairs_mut().append_pair("key", &self.config.api_key);
        }
    }

    /// Performs a GET with the retry policy and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, GoogleBooksError> {
        let mut retries = 0;

        loop {
            match self.attempt(url.clone()).await {
                Ok(body) => return Ok(body),
                Err(AttemptError::Transient(message)) if retries < self.config.max_retries => {
                    retries += 1;
                    tracing::warn!(
                        "Google Books request failed ({}), retry {} of {}",
                        message,
                        retries,
                        self.config.max_retries
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(AttemptError::Transient(message)) => {
                    return Err(GoogleBooksError::Api(message))
                }
                Err(AttemptError::Fatal(err)) => return Err(err),
            }
        }
    }

    async fn attempt<T: DeserializeOwned>(&self, url: Url) -> Result<T, AttemptError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                if e.is_decode() && !e.is_timeout() {
                    AttemptError::Fatal(GoogleBooksError::Api(format!(
                        "invalid response body: {}",
                        e.without_url()
                    )))
                } else {
                    transport_failure(e)
                }
            });
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| status.to_string());

        Err(match status {
            StatusCode::NOT_FOUND => AttemptError::Fatal(GoogleBooksError::NotFound(message)),
            s if s.is_server_error() => AttemptError::Transient(message),
            _ => AttemptError::Fatal(GoogleBooksError::Api(message)),
        })
    }
}

/// Classifies a reqwest failure, dropping the request URL from the message since it carries
/// the API key.
fn transport_failure(e: reqwest::Error) -> AttemptError {
    let transient = e.is_timeout() || e.is_connect();
    let message = e.without_url().to_string();

    if transient {
        AttemptError::Transient(message)
    } else {
        AttemptError::Fatal(GoogleBooksError::Api(message))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Builds the `q` parameter from already trimmed, non-blank parts.
fn search_expression(criteria: Option<&str>, query: Option<&str>) -> String {
    match (criteria, query) {
        (Some(criteria), Some(query)) => format!("{}:\"{}\"", criteria, query),
        (None, Some(query)) => format!("\"{}\"", query),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_search_expression() {
        assert_eq!(
            search_expression(Some("intitle"), Some("Dune")),
            "intitle:\"Dune\""
        );
        assert_eq!(search_expression(None, Some("Dune")), "\"Dune\"");
        assert_eq!(search_expression(Some("intitle"), None), "");
    }

    #[test]
    fn blank_values_are_absent() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" Dune ")), Some("Dune"));
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let config = GoogleBooksConfig::new("https://www.googleapis.com/books/v1/", "key");
        let client = reqwest::Client::new();
        let service = GoogleBooksService::new(&client, &config);

        let url = service.endpoint(&["volumes", "abc 1"]).unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/books/v1/volumes/abc%201"
        );
    }

    mod mock {
        use std::time::Duration;

        use test_utils::{
            fixture::google_books::{dune_search_response, volume},
            google_books::{MockGoogleBooks, StallingServer},
        };

        use super::*;

        fn config_for(mock: &MockGoogleBooks) -> GoogleBooksConfig {
            GoogleBooksConfig::new(mock.base_url(), "test-key")
        }

        /// Tests that a search without criteria or query does not reach the provider.
        ///
        /// Expected: Ok with empty list and no request made
        #[tokio::test]
        async fn blank_search_makes_no_request() {
            let mock = MockGoogleBooks::builder()
                .search_response(dune_search_response())
                .start()
                .await
                .unwrap();
            let config = config_for(&mock);
            let client = reqwest::Client::new();
            let service = GoogleBooksService::new(&client, &config);

            let books = service.search_books(Some("  "), None).await.unwrap();

            assert!(books.is_empty());
            assert_eq!(mock.hits(), 0);
        }

        /// Tests searching by title against a mixed-language result.
        ///
        /// Verifies that only Polish volumes are returned, in provider order, and that the
        /// search expression, key and page size are sent.
        ///
        /// Expected: Ok with the two Polish editions
        #[tokio::test]
        async fn search_returns_polish_volumes() {
            let mock = MockGoogleBooks::builder()
                .search_response(dune_search_response())
                .start()
                .await
                .unwrap();
            let config = config_for(&mock);
            let client = reqwest::Client::new();
            let service = GoogleBooksService::new(&client, &config);

            let books = service
                .search_books(Some("intitle"), Some("Dune"))
                .await
                .unwrap();

            let ids: Vec<_> = books
                .iter()
                .map(|b| b.external_id.as_deref().unwrap())
                .collect();
            assert_eq!(ids, vec!["dune-pl-1", "dune-pl-2"]);
            assert_eq!(books[0].year, 2007);
            assert_eq!(
                books[0].description.as_deref(),
                Some("Arrakis, pustynna planeta.")
            );
            assert_eq!(books[1].year, 1985);
            assert!(books.iter().all(|b| b.id.is_none()));

            let requests = mock.requests();
            assert_eq!(requests.len(), 1);
            assert!(requests[0].starts_with("/volumes?"));
            assert!(requests[0].contains("q=intitle%3A%22Dune%22"));
            assert!(requests[0].contains("key=test-key"));
            assert!(requests[0].contains("maxResults=40"));
        }

        /// Tests that an empty API key is left out of the request.
        ///
        /// Expected: Ok and no `key` parameter sent
        #[tokio::test]
        async fn empty_key_is_omitted() {
            let mock = MockGoogleBooks::builder().start().await.unwrap();
            let config = GoogleBooksConfig::new(mock.base_url(), "");
            let client = reqwest::Client::new();
            let service = GoogleBooksService::new(&client, &config);

            let books = service.search_books(None, Some("Dune")).await.unwrap();

            assert!(books.is_empty());
            assert!(!mock.requests()[0].contains("key="));
        }

        /// Tests fetching a single volume by id.
        ///
        /// Expected: Ok with the mapped book, language not checked
        #[tokio::test]
        async fn fetches_volume_by_id() {
            let mock = MockGoogleBooks::builder()
                .volume(volume("abc").title("Dune").language("en").build())
                .start()
                .await
                .unwrap();
            let config = config_for(&mock);
            let client = reqwest::Client::new();
            let service = GoogleBooksService::new(&client, &config);

            let book = service.get_book_by_external_id("abc").await.unwrap();

            assert_eq!(book.external_id.as_deref(), Some("abc"));
            assert_eq!(book.title, "Dune");
            assert!(mock.requests()[0].starts_with("/volumes/abc?"));
        }

        /// Tests that a 404 from the provider is not retried.
        ///
        /// Expected: Err(NotFound) after a single request
        #[tokio::test]
        async fn missing_volume_is_not_retried() {
            let mock = MockGoogleBooks::builder().start().await.unwrap();
            let config = config_for(&mock);
            let client = reqwest::Client::new();
            let service = GoogleBooksService::new(&client, &config);

            let result = service.get_book_by_external_id("missing").await;

            assert!(matches!(
                result,
                Err(AppError::GoogleBooksErr(GoogleBooksError::NotFound(_)))
            ));
            assert_eq!(mock.hits(), 1);
        }

        /// Tests that a transient 503 is retried once.
        ///
        /// Expected: Ok after two requests
        #[tokio::test]
        async fn transient_failure_is_retried() {
            let mock = MockGoogleBooks::builder()
                .search_response(dune_search_response())
                .fail_with(503, 1)
                .start()
                .await
                .unwrap();
            let config = config_for(&mock);
            let client = reqwest::Client::new();
            let service = GoogleBooksService::new(&client, &config);

            let books = service.search_books(None, Some("Dune")).await.unwrap();

            assert_eq!(books.len(), 2);
            assert_eq!(mock.hits(), 2);
        }

        /// Tests that a persistent 500 gives up after the retry budget.
        ///
        /// Expected: Err(Api) after two requests
        #[tokio::test]
        async fn persistent_failure_is_api_error() {
            let mock = MockGoogleBooks::builder()
                .fail_with(500, usize::MAX)
                .start()
                .await
                .unwrap();
            let config = config_for(&mock);
            let client = reqwest::Client::new();
            let service = GoogleBooksService::new(&client, &config);

            let result = service.search_books(None, Some("Dune")).await;

            assert!(matches!(
                result,
                Err(AppError::GoogleBooksErr(GoogleBooksError::Api(_)))
            ));
            assert_eq!(mock.hits(), 2);
        }

        /// Tests a timeout that fires while the response body is being read.
        ///
        /// Verifies that it is retried like a timeout during the request itself.
        ///
        /// Expected: Err(Api) after two connections
        #[tokio::test]
        async fn body_timeout_is_retried() {
            let server = StallingServer::start().await.unwrap();
            let config = GoogleBooksConfig::new(server.base_url(), "test-key");
            let client = reqwest::Client::builder()
                .timeout(Duration::from_millis(200))
                .build()
                .unwrap();
            let service = GoogleBooksService::new(&client, &config);

            let result = service.search_books(None, Some("Dune")).await;

            assert!(matches!(
                result,
                Err(AppError::GoogleBooksErr(GoogleBooksError::Api(_)))
            ));
            assert_eq!(server.hits(), 2);
        }

        /// Tests that transport failures do not carry the request URL.
        ///
        /// Expected: Err(Api) whose message omits the API key
        #[tokio::test]
        async fn transport_error_omits_api_key() {
            let config = GoogleBooksConfig::new("http://127.0.0.1:9/", "SECRET-API-KEY");
            let client = reqwest::Client::new();
            let service = GoogleBooksService::new(&client, &config);

            let result = service.search_books(Some("intitle"), Some("Dune")).await;

            match result {
                Err(AppError::GoogleBooksErr(GoogleBooksError::Api(message))) => {
                    assert!(!message.contains("SECRET-API-KEY"));
                }
                other => panic!("unexpected result: {:?}", other.map(|b| b.len())),
            }
        }

        /// Tests that a 4xx other than 404 fails without retrying.
        ///
        /// Expected: Err(Api) after a single request
        #[tokio::test]
        async fn client_error_is_not_retried() {
            let mock = MockGoogleBooks::builder()
                .fail_with(403, usize::MAX)
                .start()
                .await
                .unwrap();
            let config = config_for(&mock);
            let client = reqwest::Client::new();
            let service = GoogleBooksService::new(&client, &config);

            let result = service.search_books(None, Some("Dune")).await;

            assert!(matches!(
                result,
                Err(AppError::GoogleBooksErr(GoogleBooksError::Api(_)))
            ));
            assert_eq!(mock.hits(), 1);
        }
    }
}
