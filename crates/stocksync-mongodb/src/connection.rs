//! MongoDB connection management with pool configuration

use bson::{doc, Document as BsonDocument};
use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection, Database,
};
use std::time::Duration;
use stocksync_common::{Result, SyncError};

/// Connection pool configuration
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Minimum number of connections in the pool
    pub min_pool_size: Option<u32>,
    /// Maximum number of connections in the pool
    pub max_pool_size: Option<u32>,
    /// Connection timeout (default: 10s)
    pub connect_timeout: Option<Duration>,
    /// Server selection timeout (default: 30s)
    pub server_selection_timeout: Option<Duration>,
    /// Application name for server logs
    pub app_name: Option<String>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            // A sync run issues one operation at a time; a small pool suffices.
            min_pool_size: Some(1),
            max_pool_size: Some(5),
            connect_timeout: Some(Duration::from_secs(10)),
            server_selection_timeout: Some(Duration::from_secs(30)),
            app_name: Some("stocksync".to_string()),
        }
    }
}

/// MongoDB connection handle
///
/// Owned by the run for its duration and never explicitly closed; the client
/// is reclaimed on process exit. The driver may defer actual socket
/// establishment until the first operation.
pub struct Connection {
    client: Client,
}

impl Connection {
    /// Create a new connection with default pool settings
    pub async fn new(connection_string: &str) -> Result<Self> {
        Self::with_config(connection_string, PoolConfig::default()).await
    }

    /// Create a new connection with custom pool configuration
    pub async fn with_config(connection_string: &str, config: PoolConfig) -> Result<Self> {
        let mut client_options = ClientOptions::parse(connection_string)
            .await
            .map_err(|e| SyncError::Connection(e.to_string()))?;

        if let Some(min) = config.min_pool_size {
            client_options.min_pool_size = Some(min);
        }
        if let Some(max) = config.max_pool_size {
            client_options.max_pool_size = Some(max);
        }
        if let Some(connect) = config.connect_timeout {
            client_options.connect_timeout = Some(connect);
        }
        if let Some(server_sel) = config.server_selection_timeout {
            client_options.server_selection_timeout = Some(server_sel);
        }
        if let Some(app) = config.app_name {
            client_options.app_name = Some(app);
        }

        // Set stable API version for compatibility
        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);

        let client = Client::with_options(client_options)
            .map_err(|e| SyncError::Connection(e.to_string()))?;

        Ok(Self { client })
    }

    /// Get a database by name
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    /// Get an untyped collection inside a named database
    pub fn collection(&self, database: &str, collection: &str) -> Collection<BsonDocument> {
        self.client.database(database).collection(collection)
    }

    /// Check if the connection is healthy by pinging the server
    pub async fn ping(&self, database: &str) -> Result<()> {
        self.client
            .database(database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| SyncError::Connection(format!("Ping failed: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_config() {
        let config = PoolConfig::default();
        assert_eq!(config.min_pool_size, Some(1));
        assert_eq!(config.max_pool_size, Some(5));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.app_name, Some("stocksync".to_string()));
    }

    #[test]
    fn test_custom_pool_config() {
        let config = PoolConfig {
            min_pool_size: Some(2),
            max_pool_size: Some(10),
            connect_timeout: Some(Duration::from_secs(5)),
            server_selection_timeout: Some(Duration::from_secs(10)),
            app_name: Some("my-sync".to_string()),
        };
        assert_eq!(config.max_pool_size, Some(10));
        assert_eq!(config.app_name, Some("my-sync".to_string()));
    }
}
