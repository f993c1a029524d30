//! Application state - shared across all handlers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "mongo")]
use blog_infra::{DatabaseConnection, MongoPostRepository};

use crate::middleware::error::{AppError, AppResult};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub request_timeout: Duration,
}

impl AppState {
    /// Build state around an already-constructed repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>, request_timeout: Duration) -> Self {
        Self {
            posts,
            request_timeout,
        }
    }

    /// Connect to the configured store, falling back to memory if it is unreachable.
    pub async fn new(db_config: &DatabaseConfig, request_timeout: Duration) -> Self {
        let posts = connect_posts(db_config).await;
        tracing::info!("Application state initialized");
        Self::with_repository(posts, request_timeout)
    }

    /// Run one store call under the request deadline.
    ///
    /// On expiry the store future is dropped, which abandons the in-flight operation.
    pub async fn deadline<T, F>(&self, op: &'static str, fut: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, RepoError>>,
    {
        match tokio::time::timeout(self.request_timeout, fut).await {
            Ok(result) => result.map_err(AppError::from),
            Err(_) => {
                tracing::warn!(
                    operation = op,
                    timeout_ms = self.request_timeout.as_millis() as u64,
                    "Store call exceeded request deadline"
                );
                Err(AppError::Timeout)
            }
        }
    }
}

/// Open the post repository for `db_config`.
#[cfg(feature = "mongo")]
pub async fn connect_posts(db_config: &DatabaseConfig) -> Arc<dyn PostRepository> {
    match DatabaseConnection::init(db_config).await {
        Ok(conn) => {
            tracing::info!(database = conn.name(), "Using MongoDB post store");
            Arc::new(MongoPostRepository::new(conn.db))
        }
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            Arc::new(InMemoryPostRepository::new())
        }
    }
}

/// Open the post repository for `db_config`.
#[cfg(not(feature = "mongo"))]
pub async fn connect_posts(_db_config: &DatabaseConfig) -> Arc<dyn PostRepository> {
    tracing::info!("Running without mongo feature - using in-memory repository");
    Arc::new(InMemoryPostRepository::new())
}
