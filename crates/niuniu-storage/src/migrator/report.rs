//! Run report: one outcome per legacy table.

use niuniu_core::errors::{ErrorCode, MigrationError};
use niuniu_core::schema::EntityKind;
use serde::{Serialize, Serializer};

use crate::catalog::LegacyTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TableStatus {
    /// All rows migrated and the legacy table dropped.
    Migrated,
    /// All rows migrated; the legacy table was kept on request.
    Retained,
    /// Migration stopped; the legacy table is intact.
    Failed {
        #[serde(serialize_with = "serialize_error")]
        error: MigrationError,
    },
    /// All rows migrated, but the legacy table could not be dropped.
    DropFailed {
        #[serde(serialize_with = "serialize_error")]
        error: MigrationError,
    },
}

impl TableStatus {
    pub(crate) fn failed(error: MigrationError) -> Self {
        Self::Failed { error }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Migrated => "migrated",
            Self::Retained => "retained",
            Self::Failed { .. } => "failed",
            Self::DropFailed { .. } => "drop_failed",
        }
    }

    /// True when every row of the table reached the normalized table.
    pub fn rows_complete(&self) -> bool {
        matches!(self, Self::Migrated | Self::Retained | Self::DropFailed { .. })
    }

    pub fn error(&self) -> Option<&MigrationError> {
        match self {
            Self::Failed { error } | Self::DropFailed { error } => Some(error),
            _ => None,
        }
    }
}

fn serialize_error<S: Serializer>(error: &MigrationError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&error.coded_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableOutcome {
    pub source: String,
    pub target: String,
    pub kind: EntityKind,
    /// Rows committed to the target (record + registry entry).
    pub rows_migrated: usize,
    #[serde(flatten)]
    pub status: TableStatus,
}

impl TableOutcome {
    pub(crate) fn new(table: &LegacyTable) -> Self {
        Self {
            source: table.source.clone(),
            target: table.target_display(),
            kind: table.kind,
            rows_migrated: 0,
            status: TableStatus::Migrated,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MigrationReport {
    pub tables: Vec<TableOutcome>,
}

impl MigrationReport {
    pub fn migrated_count(&self) -> usize {
        self.tables.iter().filter(|t| t.status.rows_complete()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.tables.iter().filter(|t| t.status.error().is_some()).count()
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows_migrated).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.failed_count() == 0
    }

    pub fn outcome(&self, source: &str) -> Option<&TableOutcome> {
        self.tables.iter().find(|t| t.source == source)
    }
}

/// Dry-run view of one legacy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePlan {
    pub source: String,
    pub target: String,
    pub kind: EntityKind,
    /// `None` when the legacy table could not be counted.
    pub legacy_rows: Option<i64>,
    pub target_exists: bool,
}
