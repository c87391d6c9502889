//! Storage-layer errors for SQLite operations.

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("invalid table name: {name:?}")]
    InvalidTableName { name: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTableName { .. } => error_code::INVALID_TABLE_NAME,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
