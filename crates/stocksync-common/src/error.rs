//! Error types for stocksync

use thiserror::Error;

/// Result type alias for stocksync operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Unified error type for all stocksync operations
///
/// Every failure class is fatal to a run: nothing is retried and nothing is
/// rolled back. The variants exist so callers and logs can tell which step
/// gave out, not to drive recovery logic.
#[derive(Error, Debug, Clone)]
pub enum SyncError {
    #[error("MongoDB error: {0}")]
    MongoDB(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Serialization(err.to_string())
    }
}

// MongoDB-specific error conversions (when mongodb-errors feature is enabled)
#[cfg(feature = "mongodb-errors")]
impl From<mongodb::error::Error> for SyncError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Authentication { .. }
            | ErrorKind::ConnectionPoolCleared { .. } => {
                SyncError::Connection(err.to_string())
            }
            _ => SyncError::MongoDB(err.to_string()),
        }
    }
}

#[cfg(feature = "mongodb-errors")]
impl From<bson::ser::Error> for SyncError {
    fn from(err: bson::ser::Error) -> Self {
        SyncError::Serialization(format!("BSON serialization error: {}", err))
    }
}

#[cfg(feature = "mongodb-errors")]
impl From<bson::de::Error> for SyncError {
    fn from(err: bson::de::Error) -> Self {
        SyncError::Serialization(format!("BSON deserialization error: {}", err))
    }
}

// CSV-specific error conversions (when csv-errors feature is enabled)
#[cfg(feature = "csv-errors")]
impl From<csv::Error> for SyncError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            SyncError::Io(err.to_string())
        } else {
            SyncError::Csv(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_mongodb() {
        let err = SyncError::MongoDB("write failed".to_string());
        assert_eq!(err.to_string(), "MongoDB error: write failed");
    }

    #[test]
    fn test_error_display_connection() {
        let err = SyncError::Connection("endpoint unreachable".to_string());
        assert_eq!(err.to_string(), "Connection error: endpoint unreachable");
    }

    #[test]
    fn test_error_display_csv() {
        let err = SyncError::Csv("unequal row length".to_string());
        assert_eq!(err.to_string(), "CSV error: unequal row length");
    }

    #[test]
    fn test_error_display_io() {
        let err = SyncError::Io("file not found".to_string());
        assert_eq!(err.to_string(), "I/O error: file not found");
    }

    #[test]
    fn test_error_display_serialization() {
        let err = SyncError::Serialization("invalid document".to_string());
        assert_eq!(err.to_string(), "Serialization error: invalid document");
    }

    #[test]
    fn test_error_display_config() {
        let err = SyncError::Config("bad URI".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad URI");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SyncError = io_err.into();
        assert!(matches!(err, SyncError::Io(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: SyncError = json_err.into();
        assert!(matches!(err, SyncError::Serialization(_)));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(SyncError::Csv("failed".to_string()));
        assert!(result.is_err());
    }
}
