//! Queries for normalized `group_<N>_auction_info` tables.

use niuniu_core::errors::StorageError;
use niuniu_core::schema::timestamp::format_timestamp;
use niuniu_core::schema::NormalizedAuctionRecord;
use niuniu_core::types::TableName;
use rusqlite::{params, Connection};

use super::user_info::{niu_id_at, timestamp_at};
use crate::to_storage_err;

/// Insert a normalized auction record. Returns the row id.
pub fn insert_auction_record(
    conn: &Connection,
    table: &TableName,
    record: &NormalizedAuctionRecord,
) -> Result<i64, StorageError> {
    conn.prepare_cached(&format!(
        "INSERT INTO {} (created_at, updated_at, user_id, niu_id, length, money)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        table.quoted()
    ))
    .and_then(|mut stmt| {
        stmt.execute(params![
            format_timestamp(&record.created_at),
            format_timestamp(&record.updated_at),
            record.user_id,
            record.niu_id.to_db_string(),
            record.length,
            record.money,
        ])
    })
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

pub fn list_auction_records(
    conn: &Connection,
    table: &TableName,
) -> Result<Vec<NormalizedAuctionRecord>, StorageError> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT id, created_at, updated_at, user_id, niu_id, length, money
             FROM {} ORDER BY id",
            table.quoted()
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(NormalizedAuctionRecord {
                id: Some(row.get(0)?),
                created_at: timestamp_at(row, 1)?,
                updated_at: timestamp_at(row, 2)?,
                user_id: row.get(3)?,
                niu_id: niu_id_at(row, 4)?,
                length: row.get(5)?,
                money: row.get::<_, Option<i64>>(6)?.unwrap_or(0),
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count(conn: &Connection, table: &TableName) -> Result<i64, StorageError> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table.quoted()), [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
