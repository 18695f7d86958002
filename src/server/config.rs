//! Environment-based application configuration.

use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_GOOGLE_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/";
const DEFAULT_GOOGLE_BOOKS_TIMEOUT_SECS: u64 = 10;
const DEFAULT_GOOGLE_BOOKS_MAX_RETRIES: u32 = 1;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub cors_origin: String,
    pub google_books: GoogleBooksConfig,
}

/// Settings for the Google Books API client.
#[derive(Clone, Debug)]
pub struct GoogleBooksConfig {
    /// Base URL of the API, always ending with `/`.
    pub api_url: String,
    pub api_key: String,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Additional attempts after a transient failure.
    pub max_retries: u32,
}

impl GoogleBooksConfig {
    /// Creates provider settings with the default timeout and retry budget.
    ///
    /// # Arguments
    /// - `api_url` - Base URL of the API; a trailing `/` is appended when missing
    /// - `api_key` - API key appended to every request (omitted when empty)
    ///
    /// # Returns
    /// - `GoogleBooksConfig` - Settings with a 10 second timeout and one retry
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }

        Self {
            api_url,
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_GOOGLE_BOOKS_TIMEOUT_SECS),
            max_retries: DEFAULT_GOOGLE_BOOKS_MAX_RETRIES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` or `GOOGLE_BOOKS_API_KEY`
    ///   is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A numeric variable failed to parse
    pub fn from_env() -> Result<Self, AppError> {
        let mut google_books = GoogleBooksConfig::new(
            optional("GOOGLE_BOOKS_API_URL", DEFAULT_GOOGLE_BOOKS_API_URL),
            required("GOOGLE_BOOKS_API_KEY")?,
        );
        google_books.timeout = Duration::from_secs(parse_optional(
            "GOOGLE_BOOKS_TIMEOUT_SECS",
            DEFAULT_GOOGLE_BOOKS_TIMEOUT_SECS,
        )?);
        google_books.max_retries =
            parse_optional("GOOGLE_BOOKS_MAX_RETRIES", DEFAULT_GOOGLE_BOOKS_MAX_RETRIES)?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            cors_origin: optional("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            google_books,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_optional<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_trailing_slash_to_api_url() {
        let config = GoogleBooksConfig::new("http://localhost:1234/books/v1", "key");

        assert_eq!(config.api_url, "http://localhost:1234/books/v1/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 1);
    }

    #[test]
    fn keeps_existing_trailing_slash() {
        let config = GoogleBooksConfig::new(DEFAULT_GOOGLE_BOOKS_API_URL, "");

        assert_eq!(config.api_url, DEFAULT_GOOGLE_BOOKS_API_URL);
    }
}
