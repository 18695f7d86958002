use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::{Config, GoogleBooksConfig},
    error::{config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for Google Books requests.
///
/// Every request is bounded by the configured timeout and redirects are not followed.
///
/// # Arguments
/// - `config` - Google Books settings providing the timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client(config: &GoogleBooksConfig) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the CORS layer allowing the configured frontend origin.
///
/// # Arguments
/// - `config` - Application configuration containing the allowed origin
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing the origin with the methods the API uses
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `CORS_ORIGIN` is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin =
        HeaderValue::from_str(&config.cors_origin).map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: config.cors_origin.clone(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any))
}
