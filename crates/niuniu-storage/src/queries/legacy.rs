//! Reads and drops of legacy per-group tables.

use niuniu_core::errors::StorageError;
use niuniu_core::schema::{LegacyAuctionRow, LegacyUserRow};
use niuniu_core::types::TableName;
use rusqlite::Connection;

use super::value::ColumnIndex;
use crate::to_storage_err;

/// All rows of a legacy user table, in storage order.
pub fn read_user_rows(conn: &Connection, table: &TableName) -> Result<Vec<LegacyUserRow>, StorageError> {
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM {}", table.quoted()))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let cols = ColumnIndex::of(&stmt);

    let rows = stmt
        .query_map([], |row| {
            Ok(LegacyUserRow {
                uid: cols.int(row, "UID")?,
                length: cols.real(row, "Length")?,
                user_count: cols.int(row, "UserCount")?,
                wei_ge: cols.int(row, "WeiGe")?,
                philter: cols.int(row, "Philter")?,
                artifact: cols.int(row, "Artifact")?,
                shen_ji: cols.int(row, "ShenJi")?,
                buff1: cols.int(row, "Buff1")?,
                buff2: cols.int(row, "Buff2")?,
                buff3: cols.int(row, "Buff3")?,
                buff4: cols.int(row, "Buff4")?,
                buff5: cols.int(row, "Buff5")?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// All rows of a legacy `auction_<N>` table.
pub fn read_auction_rows(
    conn: &Connection,
    table: &TableName,
) -> Result<Vec<LegacyAuctionRow>, StorageError> {
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM {}", table.quoted()))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let cols = ColumnIndex::of(&stmt);

    let rows = stmt
        .query_map([], |row| {
            Ok(LegacyAuctionRow {
                id: cols.int(row, "id")?,
                user_id: cols.int(row, "user_id")?,
                length: cols.real(row, "length")?,
                money: cols.int(row, "money")?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_rows(conn: &Connection, table: &TableName) -> Result<i64, StorageError> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table.quoted()), [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn drop_table(conn: &Connection, table: &TableName) -> Result<(), StorageError> {
    conn.execute_batch(&format!("DROP TABLE {};", table.quoted()))
        .map_err(|e| to_storage_err(e.to_string()))
}
