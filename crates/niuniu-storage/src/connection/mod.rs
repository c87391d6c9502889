//! Connection management. The migration is a single sequential pipeline, so
//! one connection is opened and every step borrows it.

pub mod pragmas;

use std::path::{Path, PathBuf};

use niuniu_core::config::DatabaseConfig;
use niuniu_core::errors::{MigrationError, StorageError};
use rusqlite::{Connection, OpenFlags};

use self::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open an existing database file. A missing file is an error rather than
    /// an empty database: there is nothing to migrate in a fresh file.
    pub fn open(path: &Path, busy_timeout_ms: u64) -> Result<Self, StorageError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)
            .map_err(|e| to_storage_err(format!("open {}: {e}", path.display())))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self { conn, path: Some(path.to_path_buf()) })
    }

    /// Open from config, classifying failure as a fatal connection error.
    pub fn open_with_config(config: &DatabaseConfig) -> Result<Self, MigrationError> {
        let path = config.effective_path();
        Self::open(&path, config.effective_busy_timeout_ms()).map_err(|source| {
            MigrationError::Connection { path: path.display().to_string(), source }
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, niuniu_core::constants::DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self { conn, path: None })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
