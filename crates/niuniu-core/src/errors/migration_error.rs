//! Migration errors, one variant per failure class of a run.
//!
//! Fatal variants abort the whole run before any table is touched.
//! Every other variant is scoped to a single legacy table: the runner
//! records it and moves on to the next table.

use super::error_code::{self, ErrorCode};
use super::StorageError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to open database {path}: {source}")]
    Connection { path: String, source: StorageError },

    #[error("failed to read table catalog: {source}")]
    CatalogRead { source: StorageError },

    #[error("failed to provision registry table: {source}")]
    RegistryProvisioning { source: StorageError },

    #[error("failed to provision target table {table}: {source}")]
    SchemaProvisioning { table: String, source: StorageError },

    #[error("failed to read legacy table {table}: {source}")]
    RowRead { table: String, source: StorageError },

    #[error("failed to write row {row} from {source_table} into {target_table}: {source}")]
    RowWrite {
        source_table: String,
        target_table: String,
        row: usize,
        source: StorageError,
    },

    #[error("failed to drop legacy table {table}: {source}")]
    LegacyDrop { table: String, source: StorageError },
}

impl MigrationError {
    /// Fatal errors stop the run; the rest only stop the current table.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::CatalogRead { .. } | Self::RegistryProvisioning { .. }
        )
    }

    /// The underlying storage error.
    pub fn storage_error(&self) -> &StorageError {
        match self {
            Self::Connection { source, .. }
            | Self::CatalogRead { source }
            | Self::RegistryProvisioning { source }
            | Self::SchemaProvisioning { source, .. }
            | Self::RowRead { source, .. }
            | Self::RowWrite { source, .. }
            | Self::LegacyDrop { source, .. } => source,
        }
    }
}

impl ErrorCode for MigrationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Connection { .. } => error_code::CONNECTION_FAILED,
            Self::CatalogRead { .. } => error_code::CATALOG_READ_FAILED,
            Self::RegistryProvisioning { .. } => error_code::REGISTRY_PROVISIONING_FAILED,
            Self::SchemaProvisioning { .. } => error_code::PROVISIONING_FAILED,
            Self::RowRead { .. } => error_code::ROW_READ_FAILED,
            Self::RowWrite { .. } => error_code::ROW_WRITE_FAILED,
            Self::LegacyDrop { .. } => error_code::LEGACY_DROP_FAILED,
        }
    }
}
