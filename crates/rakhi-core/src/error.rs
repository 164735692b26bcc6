//! Error types for Rakhi Gift

use thiserror::Error;

/// Main error type for Rakhi Gift operations
///
/// Widgets never see these: the persistence adapter logs and swallows them.
#[derive(Error, Debug)]
pub enum GiftError {
    /// Error during storage operations
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Stored content could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store has no room left for the value
    #[error("Quota exceeded writing {key}: {needed} bytes over a {limit} byte limit")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    /// Uploaded file is not a readable image
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GiftError
pub type GiftResult<T> = Result<T, GiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_display() {
        let err = GiftError::QuotaExceeded {
            key: "rakhi-journal".to_string(),
            needed: 12,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "Quota exceeded writing rakhi-journal: 12 bytes over a 10 byte limit"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: GiftError = json_err.into();
        assert!(matches!(err, GiftError::Serialization(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GiftError = io_err.into();
        assert!(matches!(err, GiftError::Io(_)));
    }
}
