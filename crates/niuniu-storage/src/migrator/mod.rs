//! Row migrator: moves every legacy table found by the catalog scan into its
//! normalized table, registering each migrated niuniu.
//!
//! Tables are processed one at a time in catalog order, user tables first.
//! A failure is confined to its table; only registry provisioning and the
//! catalog read abort the whole run.

pub mod report;
pub mod rows;
pub mod table;

use niuniu_core::config::MigrationConfig;
use niuniu_core::errors::{ErrorCode, MigrationError};
use niuniu_core::schema::EntityKind;
use rusqlite::Connection;

use crate::catalog::scan_catalog;
use crate::introspect::has_table;
use crate::provision::ensure_registry_table;
use crate::queries::legacy::count_rows;

pub use report::{MigrationReport, TableOutcome, TablePlan, TableStatus};
use rows::{AuctionRows, UserRows};
pub use table::migrate_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationOptions {
    /// Drop each legacy table once all of its rows are migrated.
    pub drop_legacy: bool,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self { drop_legacy: true }
    }
}

impl From<&MigrationConfig> for MigrationOptions {
    fn from(config: &MigrationConfig) -> Self {
        Self { drop_legacy: config.effective_drop_legacy() }
    }
}

pub struct MigrationRunner<'c> {
    conn: &'c Connection,
    options: MigrationOptions,
}

impl<'c> MigrationRunner<'c> {
    pub fn new(conn: &'c Connection, options: MigrationOptions) -> Self {
        Self { conn, options }
    }

    /// Migrate every legacy table.
    ///
    /// Returns `Err` only for fatal errors; per-table failures are recorded
    /// in the report.
    pub fn run(&self) -> Result<MigrationReport, MigrationError> {
        ensure_registry_table(self.conn)
            .map_err(|source| MigrationError::RegistryProvisioning { source })?;
        let scan =
            scan_catalog(self.conn).map_err(|source| MigrationError::CatalogRead { source })?;

        let mut report = MigrationReport::default();
        for table in scan.legacy_tables() {
            let outcome = match table.kind {
                EntityKind::User => migrate_table::<UserRows>(self.conn, table, self.options),
                EntityKind::Auction => migrate_table::<AuctionRows>(self.conn, table, self.options),
            };
            log_outcome(&outcome);
            report.tables.push(outcome);
        }

        tracing::info!(
            migrated = report.migrated_count(),
            failed = report.failed_count(),
            rows = report.total_rows(),
            "migration finished"
        );
        Ok(report)
    }

    /// Dry run: classify and count without writing anything.
    pub fn plan(&self) -> Result<Vec<TablePlan>, MigrationError> {
        let scan =
            scan_catalog(self.conn).map_err(|source| MigrationError::CatalogRead { source })?;

        Ok(scan
            .legacy_tables()
            .map(|table| {
                let legacy_rows = table
                    .source_table()
                    .and_then(|source| count_rows(self.conn, &source))
                    .ok();
                let target_exists = table
                    .target_table()
                    .and_then(|target| has_table(self.conn, &target))
                    .unwrap_or(false);
                TablePlan {
                    source: table.source.clone(),
                    target: table.target_display(),
                    kind: table.kind,
                    legacy_rows,
                    target_exists,
                }
            })
            .collect())
    }
}

fn log_outcome(outcome: &TableOutcome) {
    match &outcome.status {
        TableStatus::Migrated | TableStatus::Retained => tracing::info!(
            table = %outcome.source,
            new_table = %outcome.target,
            rows = outcome.rows_migrated,
            status = outcome.status.as_str(),
            "migrated table"
        ),
        TableStatus::Failed { error } | TableStatus::DropFailed { error } => tracing::error!(
            table = %outcome.source,
            new_table = %outcome.target,
            rows = outcome.rows_migrated,
            error_code = error.error_code(),
            "failed to migrate table: {error}"
        ),
    }
}
