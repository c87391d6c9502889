//! Schema introspection: list tables, has-table, has-column.

use niuniu_core::errors::StorageError;
use niuniu_core::types::TableName;
use rusqlite::{params, Connection};

use crate::to_storage_err;

/// All table names from `sqlite_master`, in catalog order.
pub fn list_tables(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn has_table(conn: &Connection, table: &TableName) -> Result<bool, StorageError> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        params![table.as_str()],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Column names of `table` as declared.
pub fn table_columns(conn: &Connection, table: &TableName) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table.quoted()))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Column names compare case-insensitively, as in SQLite.
pub fn has_column(conn: &Connection, table: &TableName, column: &str) -> Result<bool, StorageError> {
    Ok(table_columns(conn, table)?
        .iter()
        .any(|c| c.eq_ignore_ascii_case(column)))
}

pub fn has_index(conn: &Connection, index: &str) -> Result<bool, StorageError> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'index' AND name = ?1)",
        params![index],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
