use std::time::Duration;

#[cfg(feature = "mongo")]
use blog_core::error::RepoError;
#[cfg(feature = "mongo")]
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

/// Database name used when the connection URL does not name one.
#[cfg(feature = "mongo")]
const DEFAULT_DATABASE: &str = "blog";

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB URL (e.g., mongodb://localhost/blogDb)
    pub url: String,
    /// Overrides the database named in the URL path.
    pub database_name: Option<String>,
    /// Connect and server-selection timeout.
    pub connect_timeout: Duration,
    pub max_pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost/blogDb".to_string(),
            database_name: None,
            connect_timeout: Duration::from_secs(5),
            max_pool_size: 100,
        }
    }
}

/// An open, verified connection to one MongoDB database.
///
/// The underlying client pools connections internally, so a single
/// `DatabaseConnection` is shared by every request for the life of the process.
#[cfg(feature = "mongo")]
pub struct DatabaseConnection {
    pub db: Database,
}

#[cfg(feature = "mongo")]
impl DatabaseConnection {
    /// Connect and ping the server. Fails instead of hanging when the server is unreachable.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Initializing database connection...");

        let mut options = ClientOptions::parse(config.url.as_str())
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        options.app_name = Some("blog-api".to_string());
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);
        options.max_pool_size = Some(config.max_pool_size);

        let name = config
            .database_name
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client =
            Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;
        let db = client.database(&name);

        let ping = async { db.run_command(doc! { "ping": 1 }).await };
        tokio::time::timeout(config.connect_timeout, ping)
            .await
            .map_err(|_| RepoError::Connection("Connection timed out".to_string()))?
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(
            database = %name,
            pool = config.max_pool_size,
            "Connected to MongoDB"
        );

        Ok(Self { db })
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }
}
