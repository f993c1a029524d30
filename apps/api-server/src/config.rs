//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use blog_infra::DatabaseConfig;

const DEFAULT_DATABASE_URL: &str = "mongodb://localhost/blogDb";
const DEFAULT_TEST_DATABASE_URL: &str = "mongodb://localhost/blogTestDb";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Store used by the integration test suite.
    pub test_database_url: String,
    /// Deadline for the store call of a single request.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            connect_timeout: Duration::from_secs(parse_var("DB_CONNECT_TIMEOUT_SECS", 5)),
            max_pool_size: parse_var("DB_MAX_POOL_SIZE", 100),
            ..DatabaseConfig::default()
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            database,
            test_database_url: env::var("TEST_DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_TEST_DATABASE_URL.to_string()),
            request_timeout: Duration::from_secs(parse_var("REQUEST_TIMEOUT_SECS", 10)),
        }
    }

    /// Configuration for the test store, with the same timeouts as the primary one.
    pub fn test_database(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.test_database_url.clone(),
            ..self.database.clone()
        }
    }
}

/// Parse an environment variable, falling back to `default` when unset or invalid.
fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
