//! Queries for normalized `group_<N>_user_info` tables.

use niuniu_core::errors::StorageError;
use niuniu_core::schema::timestamp::{format_timestamp, parse_timestamp};
use niuniu_core::schema::NormalizedUserRecord;
use niuniu_core::types::TableName;
use rusqlite::{params, Connection, Row};

use crate::to_storage_err;

/// Insert a normalized user record. Returns the row id.
pub fn insert_user_record(
    conn: &Connection,
    table: &TableName,
    record: &NormalizedUserRecord,
) -> Result<i64, StorageError> {
    conn.prepare_cached(&format!(
        "INSERT INTO {} (
            created_at, updated_at, deleted_at, user_id, niu_id, length,
            wei_ge, mei_yao, artifact, shen_ji, buff2, buff3, buff4, buff5
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        table.quoted()
    ))
    .and_then(|mut stmt| {
        stmt.execute(params![
            format_timestamp(&record.created_at),
            format_timestamp(&record.updated_at),
            record.deleted_at.as_ref().map(format_timestamp),
            record.user_id,
            record.niu_id.to_db_string(),
            record.length,
            record.wei_ge,
            record.mei_yao,
            record.artifact,
            record.shen_ji,
            record.buff2,
            record.buff3,
            record.buff4,
            record.buff5,
        ])
    })
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// All records of `table`, ordered by id.
pub fn list_user_records(
    conn: &Connection,
    table: &TableName,
) -> Result<Vec<NormalizedUserRecord>, StorageError> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT id, created_at, updated_at, deleted_at, user_id, niu_id, length,
                    wei_ge, mei_yao, artifact, shen_ji, buff2, buff3, buff4, buff5
             FROM {} ORDER BY id",
            table.quoted()
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], map_user_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count(conn: &Connection, table: &TableName) -> Result<i64, StorageError> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table.quoted()), [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_by_user(conn: &Connection, table: &TableName, user_id: i64) -> Result<i64, StorageError> {
    conn.query_row(
        &format!("SELECT COUNT(*) FROM {} WHERE user_id = ?1", table.quoted()),
        params![user_id],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn map_user_row(row: &Row<'_>) -> rusqlite::Result<NormalizedUserRecord> {
    Ok(NormalizedUserRecord {
        id: Some(row.get(0)?),
        created_at: timestamp_at(row, 1)?,
        updated_at: timestamp_at(row, 2)?,
        deleted_at: row
            .get::<_, Option<String>>(3)?
            .as_deref()
            .and_then(parse_timestamp),
        user_id: row.get(4)?,
        niu_id: niu_id_at(row, 5)?,
        length: row.get(6)?,
        wei_ge: row.get(7)?,
        mei_yao: row.get(8)?,
        artifact: row.get(9)?,
        shen_ji: row.get(10)?,
        buff2: row.get(11)?,
        buff3: row.get(12)?,
        buff4: row.get(13)?,
        buff5: row.get(14)?,
    })
}

pub(crate) fn timestamp_at(
    row: &Row<'_>,
    idx: usize,
) -> rusqlite::Result<chrono::DateTime<chrono::Utc>> {
    let text: String = row.get(idx)?;
    parse_timestamp(&text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("bad timestamp {text:?}").into(),
        )
    })
}

pub(crate) fn niu_id_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<niuniu_core::types::NiuId> {
    let text: String = row.get(idx)?;
    text.parse().map_err(|e: uuid::Error| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
