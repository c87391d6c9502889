//! SQLite layer of the niuniu migration: connection, table catalog scan,
//! schema provisioning, registry writes, and the per-table row migrator.

pub mod catalog;
pub mod connection;
pub mod introspect;
pub mod migrator;
pub mod provision;
pub mod queries;

pub use catalog::{scan_catalog, CatalogScan, LegacyTable, TableClass};
pub use connection::Database;
pub use migrator::{MigrationOptions, MigrationReport, MigrationRunner, TableOutcome, TablePlan, TableStatus};

use niuniu_core::errors::StorageError;

/// Wrap a driver error message into the storage error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> StorageError {
    StorageError::SqliteError { message: message.into() }
}
