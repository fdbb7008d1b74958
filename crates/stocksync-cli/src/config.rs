//! Run configuration
//!
//! Built once at startup and passed into each step; no module-level handles.
//! The original tooling embedded a credential-bearing Atlas URI as its
//! fallback connection string. That secret is deliberately not preserved:
//! the documented default points at a local, unauthenticated server.

use std::path::PathBuf;

/// Environment variable supplying the connection string
pub const MONGO_URI_VAR: &str = "MONGO_URI";

/// Fallback connection string when `MONGO_URI` is unset or empty
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";

/// Target database
pub const DEFAULT_DATABASE: &str = "corbetts";

/// Target collection
pub const DEFAULT_COLLECTION: &str = "lightspeed_products";

/// CSV export expected in the working directory
pub const DEFAULT_CSV_PATH: &str = "item_listings_local_matches.csv";

/// Field the prune step matches against
pub const FILTER_FIELD: &str = "Item";

/// Retention pattern: keep documents whose field contains either year token
pub const YEAR_PATTERN: &str = "2024|2025";

/// Configuration for one sync run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub mongo_uri: String,
    pub database: String,
    pub collection: String,
    pub csv_path: PathBuf,
    pub filter_field: String,
    pub year_pattern: String,
}

impl SyncConfig {
    /// Build a config, resolving the URI from the environment when not given
    ///
    /// An empty `MONGO_URI` counts as unset, matching the original tooling's
    /// `getenv(...) or default` behavior.
    pub fn new(
        uri: Option<String>,
        database: String,
        collection: String,
        csv_path: PathBuf,
    ) -> Self {
        let mongo_uri = uri
            .or_else(|| std::env::var(MONGO_URI_VAR).ok())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MONGO_URI.to_string());

        Self {
            mongo_uri,
            database,
            collection,
            csv_path,
            filter_field: FILTER_FIELD.to_string(),
            year_pattern: YEAR_PATTERN.to_string(),
        }
    }
}
