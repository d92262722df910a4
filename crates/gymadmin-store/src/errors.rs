//! Error handling for gymadmin-store
//!
//! Builds gymadmin-core `ExError`s with store-specific context

use gymadmin_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error for an already-applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::CorruptState)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason)
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_message(err.to_string())
}

/// The backing file exists but does not hold a key-value document
pub fn corrupt_file(path: &std::path::Path, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::CorruptState)
        .with_op("open_json_file")
        .with_message(format!("{} is not a JSON object of strings: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_mismatch_is_corrupt_state() {
        let err = checksum_mismatch("001_kv_schema", "aa", "bb");
        assert_eq!(err.kind(), ExErrorKind::CorruptState);
        assert!(err.message().contains("001_kv_schema"));
    }

    #[test]
    fn test_io_error_keeps_operation() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = io_error("write_json_temp", io);
        assert_eq!(err.code(), "ERR_IO");
        assert_eq!(err.op(), Some("write_json_temp"));
    }
}
