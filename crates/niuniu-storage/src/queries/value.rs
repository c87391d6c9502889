//! Lenient column decoding for legacy data.
//!
//! SQLite stores whatever was written, so a legacy INTEGER column may hold a
//! REAL or numeric TEXT. NULL decodes as zero.

use std::collections::HashMap;

use rusqlite::types::{Type, ValueRef};
use rusqlite::{Row, Statement};

/// Case-insensitive column name → index map for a prepared statement.
pub(crate) struct ColumnIndex(HashMap<String, usize>);

impl ColumnIndex {
    pub(crate) fn of(stmt: &Statement<'_>) -> Self {
        Self(
            stmt.column_names()
                .into_iter()
                .enumerate()
                .map(|(i, name)| (name.to_ascii_lowercase(), i))
                .collect(),
        )
    }

    pub(crate) fn get(&self, name: &str) -> Option<usize> {
        self.0.get(&name.to_ascii_lowercase()).copied()
    }

    /// Integer value of `name`, or 0 when the column is absent.
    pub(crate) fn int(&self, row: &Row<'_>, name: &str) -> rusqlite::Result<i64> {
        match self.get(name) {
            Some(idx) => int_at(row, idx),
            None => Ok(0),
        }
    }

    /// Real value of `name`, or 0.0 when the column is absent.
    pub(crate) fn real(&self, row: &Row<'_>, name: &str) -> rusqlite::Result<f64> {
        match self.get(name) {
            Some(idx) => real_at(row, idx),
            None => Ok(0.0),
        }
    }
}

fn int_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<i64> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(0),
        ValueRef::Integer(i) => Ok(i),
        ValueRef::Real(f) => Ok(f as i64),
        ValueRef::Text(t) => parse_text(t, idx, Type::Integer, |s| {
            s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }),
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            idx,
            column_label(row, idx),
            Type::Blob,
        )),
    }
}

fn real_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<f64> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(0.0),
        ValueRef::Integer(i) => Ok(i as f64),
        ValueRef::Real(f) => Ok(f),
        ValueRef::Text(t) => parse_text(t, idx, Type::Real, |s| s.parse::<f64>().ok()),
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            idx,
            column_label(row, idx),
            Type::Blob,
        )),
    }
}

fn parse_text<T>(
    bytes: &[u8],
    idx: usize,
    ty: Type,
    parse: impl FnOnce(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    std::str::from_utf8(bytes)
        .ok()
        .map(str::trim)
        .and_then(parse)
        .ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                ty,
                format!("non-numeric text {:?}", String::from_utf8_lossy(bytes)).into(),
            )
        })
}

fn column_label(row: &Row<'_>, idx: usize) -> String {
    let stmt: &Statement<'_> = row.as_ref();
    stmt.column_name(idx)
        .map(str::to_string)
        .unwrap_or_else(|_| idx.to_string())
}
