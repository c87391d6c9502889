//! Migration of a single legacy table.

use chrono::Utc;
use niuniu_core::errors::{MigrationError, StorageError};
use niuniu_core::schema::RegistryEntry;
use niuniu_core::types::{NiuId, TableName};
use rusqlite::Connection;

use super::report::{TableOutcome, TableStatus};
use super::rows::RowMigration;
use super::MigrationOptions;
use crate::catalog::LegacyTable;
use crate::provision::ensure_target_table;
use crate::queries::{legacy, registry};
use crate::to_storage_err;

/// Migrate one legacy table into its normalized table.
///
/// Steps: read all legacy rows, provision the target, then for each row mint
/// an id and write the record plus its registry entry in one transaction.
/// The legacy table is dropped only after every row is written. A failed row
/// stops the table; rows committed before it stay.
pub fn migrate_table<M: RowMigration>(
    conn: &Connection,
    table: &LegacyTable,
    options: MigrationOptions,
) -> TableOutcome {
    let mut outcome = TableOutcome::new(table);
    let mut rows_written = 0;
    let result = run::<M>(conn, table, options, &mut rows_written);
    outcome.rows_migrated = rows_written;
    outcome.status = result;
    outcome
}

fn run<M: RowMigration>(
    conn: &Connection,
    table: &LegacyTable,
    options: MigrationOptions,
    rows_written: &mut usize,
) -> TableStatus {
    let source = match table.source_table() {
        Ok(source) => source,
        Err(source) => {
            return TableStatus::failed(MigrationError::RowRead { table: table.source.clone(), source })
        }
    };
    let target = match table.target_table() {
        Ok(target) => target,
        Err(source) => {
            return TableStatus::failed(MigrationError::SchemaProvisioning {
                table: table.target_display(),
                source,
            })
        }
    };

    let rows = match M::read(conn, &source) {
        Ok(rows) => rows,
        Err(source) => {
            return TableStatus::failed(MigrationError::RowRead { table: table.source.clone(), source })
        }
    };

    if let Err(source) = ensure_target_table(conn, &target, M::KIND) {
        return TableStatus::failed(MigrationError::SchemaProvisioning {
            table: target.to_string(),
            source,
        });
    }

    for (index, row) in rows.iter().enumerate() {
        if let Err(source) = write_row::<M>(conn, &target, row) {
            return TableStatus::failed(MigrationError::RowWrite {
                source_table: table.source.clone(),
                target_table: target.to_string(),
                row: index + 1,
                source,
            });
        }
        *rows_written += 1;
    }

    if !options.drop_legacy {
        tracing::debug!(table = %source, "keeping legacy table");
        return TableStatus::Retained;
    }

    match legacy::drop_table(conn, &source) {
        Ok(()) => TableStatus::Migrated,
        Err(source_err) => TableStatus::DropFailed {
            error: MigrationError::LegacyDrop { table: source.to_string(), source: source_err },
        },
    }
}

/// Record and registry entry commit together or not at all.
fn write_row<M: RowMigration>(
    conn: &Connection,
    target: &TableName,
    row: &M::Legacy,
) -> Result<(), StorageError> {
    let niu_id = NiuId::mint();
    let now = Utc::now();

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("begin row transaction: {e}")))?;
    M::insert(&tx, target, row, niu_id, now)?;
    registry::insert_entry(&tx, &RegistryEntry::new(niu_id, M::KIND.registry_status(), now))?;
    tx.commit()
        .map_err(|e| to_storage_err(format!("commit row transaction: {e}")))
}
