//! PRAGMA configuration applied to the migration connection.
//!
//! Only per-connection settings: the journal mode and vacuum mode of the
//! bot's database file are left as the bot configured them.

use std::time::Duration;

use niuniu_core::errors::StorageError;
use rusqlite::Connection;

use crate::to_storage_err;

pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u64) -> Result<(), StorageError> {
    conn.busy_timeout(Duration::from_millis(busy_timeout_ms))
        .map_err(|e| to_storage_err(format!("failed to set busy_timeout: {e}")))?;
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| to_storage_err(format!("failed to apply pragmas: {e}")))
}

/// Read back the busy timeout, in milliseconds.
pub fn busy_timeout_ms(conn: &Connection) -> Result<i64, StorageError> {
    conn.pragma_query_value(None, "busy_timeout", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
