//! Schema provisioner: makes sure target tables exist with the normalized
//! layout and indexes. Existing tables are never dropped or altered.

pub mod ddl;
pub mod registry;

use niuniu_core::errors::StorageError;
use niuniu_core::schema::EntityKind;
use niuniu_core::types::TableName;
use rusqlite::Connection;

use crate::introspect::has_table;
use crate::to_storage_err;

pub use registry::{ensure_registry_table, RegistryProvision};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    /// The target was left exactly as found; rows will be appended to it.
    AlreadyExists,
}

/// Ensure `table` exists with the normalized schema for `kind`.
///
/// The table and its indexes are created in one transaction, so a failure
/// never leaves a table without its indexes.
pub fn ensure_target_table(
    conn: &Connection,
    table: &TableName,
    kind: EntityKind,
) -> Result<ProvisionOutcome, StorageError> {
    if has_table(conn, table)? {
        tracing::info!(new_table = %table, "target table exists, appending without drop");
        return Ok(ProvisionOutcome::AlreadyExists);
    }

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("begin provisioning {table}: {e}")))?;
    for statement in ddl::create_statements(table, kind.schema()) {
        tx.execute_batch(&statement)
            .map_err(|e| to_storage_err(format!("{e} in `{}`", statement.trim())))?;
    }
    tx.commit()
        .map_err(|e| to_storage_err(format!("commit provisioning {table}: {e}")))?;

    tracing::info!(new_table = %table, kind = kind.as_str(), "created target table");
    Ok(ProvisionOutcome::Created)
}
