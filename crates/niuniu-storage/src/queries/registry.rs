//! Queries for the `niu_niu_managers` registry.

use niuniu_core::constants::REGISTRY_TABLE;
use niuniu_core::errors::StorageError;
use niuniu_core::schema::timestamp::{format_timestamp, parse_timestamp};
use niuniu_core::schema::RegistryEntry;
use niuniu_core::types::{NiuId, NiuStatus};
use rusqlite::{params, Connection, OptionalExtension};

use crate::to_storage_err;

/// Insert a registry entry. Returns the row id.
pub fn insert_entry(conn: &Connection, entry: &RegistryEntry) -> Result<i64, StorageError> {
    conn.prepare_cached(&format!(
        "INSERT INTO {REGISTRY_TABLE} (created_at, niu_id, status) VALUES (?1, ?2, ?3)"
    ))
    .and_then(|mut stmt| {
        stmt.execute(params![
            format_timestamp(&entry.created_at),
            entry.niu_id.to_db_string(),
            entry.status.as_i64(),
        ])
    })
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

pub fn get_by_niu_id(conn: &Connection, niu_id: &NiuId) -> Result<Option<RegistryEntry>, StorageError> {
    let raw = conn
        .query_row(
            &format!("SELECT id, created_at, niu_id, status FROM {REGISTRY_TABLE} WHERE niu_id = ?1"),
            params![niu_id.to_db_string()],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<i64>>(3)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    raw.map(|(id, created_at, niu_id, status)| -> Result<RegistryEntry, StorageError> {
        let status = status.unwrap_or(0);
        Ok(RegistryEntry {
            id: Some(id),
            created_at: created_at
                .as_deref()
                .and_then(parse_timestamp)
                .ok_or_else(|| to_storage_err(format!("bad created_at for registry row {id}")))?,
            niu_id: niu_id
                .parse()
                .map_err(|e| to_storage_err(format!("bad niu_id {niu_id:?}: {e}")))?,
            status: NiuStatus::from_i64(status)
                .ok_or_else(|| to_storage_err(format!("unknown status {status}")))?,
        })
    })
    .transpose()
}

pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {REGISTRY_TABLE}"), [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_by_status(conn: &Connection, status: NiuStatus) -> Result<i64, StorageError> {
    conn.query_row(
        &format!("SELECT COUNT(*) FROM {REGISTRY_TABLE} WHERE status = ?1"),
        params![status.as_i64()],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Every non-NULL niu id in the registry, in insertion order.
pub fn list_niu_ids(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT niu_id FROM {REGISTRY_TABLE} WHERE niu_id IS NOT NULL ORDER BY id"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
