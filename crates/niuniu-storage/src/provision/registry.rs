//! Registry table provisioning.
//!
//! A missing registry is created outright. An existing one is upgraded in
//! place: columns the migration needs are added, nothing is removed.

use niuniu_core::constants::REGISTRY_TABLE;
use niuniu_core::errors::StorageError;
use niuniu_core::schema::columns::REGISTRY_SCHEMA;
use niuniu_core::types::TableName;
use rusqlite::Connection;

use super::ddl;
use crate::introspect::{has_column, has_table};
use crate::to_storage_err;

/// Columns added to a pre-existing registry when absent.
const UPGRADE_COLUMNS: [&str; 2] = ["niu_id", "status"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryProvision {
    pub created: bool,
    pub added_columns: Vec<&'static str>,
}

pub fn registry_table() -> Result<TableName, StorageError> {
    TableName::new(REGISTRY_TABLE)
}

pub fn ensure_registry_table(conn: &Connection) -> Result<RegistryProvision, StorageError> {
    let table = registry_table()?;
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("begin registry provisioning: {e}")))?;

    let mut outcome = RegistryProvision::default();
    if has_table(&tx, &table)? {
        for column in UPGRADE_COLUMNS {
            if has_column(&tx, &table, column)? {
                continue;
            }
            let def = REGISTRY_SCHEMA
                .column(column)
                .ok_or_else(|| to_storage_err(format!("registry schema lacks {column}")))?;
            tx.execute_batch(&format!(
                "ALTER TABLE {} ADD COLUMN {};",
                table.quoted(),
                def.definition()
            ))
            .map_err(|e| to_storage_err(format!("add registry column {column}: {e}")))?;
            outcome.added_columns.push(def.name);
        }
        for statement in ddl::create_index_sql(&table, &REGISTRY_SCHEMA) {
            tx.execute_batch(&statement)
                .map_err(|e| to_storage_err(format!("registry index: {e}")))?;
        }
    } else {
        for statement in ddl::create_statements(&table, &REGISTRY_SCHEMA) {
            tx.execute_batch(&statement)
                .map_err(|e| to_storage_err(format!("create registry: {e}")))?;
        }
        outcome.created = true;
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("commit registry provisioning: {e}")))?;

    if outcome.created {
        tracing::info!(table = REGISTRY_TABLE, "created registry table");
    } else if !outcome.added_columns.is_empty() {
        tracing::info!(table = REGISTRY_TABLE, columns = ?outcome.added_columns, "upgraded registry table");
    }
    Ok(outcome)
}
