//! Table catalog scanner: finds the legacy per-group tables by name.
//!
//! Classification order:
//! 1. `sqlite_sequence` and the registry are system tables.
//! 2. `group_*` tables are already migrated.
//! 3. A name that parses as an integer is a legacy user table; the name is
//!    the group.
//! 4. `auction_<group>` is a legacy auction table.
//! 5. Anything else is left alone.

use niuniu_core::constants::{
    LEGACY_AUCTION_PREFIX, NORMALIZED_PREFIX, REGISTRY_TABLE, SQLITE_SEQUENCE_TABLE,
};
use niuniu_core::errors::StorageError;
use niuniu_core::schema::EntityKind;
use niuniu_core::types::{GroupId, TableName};
use serde::Serialize;

use crate::introspect::list_tables;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "class", content = "group", rename_all = "snake_case")]
pub enum TableClass {
    System,
    AlreadyMigrated,
    LegacyUser(GroupId),
    LegacyAuction(GroupId),
    Ignored,
}

impl TableClass {
    pub fn legacy_kind(&self) -> Option<EntityKind> {
        match self {
            Self::LegacyUser(_) => Some(EntityKind::User),
            Self::LegacyAuction(_) => Some(EntityKind::Auction),
            _ => None,
        }
    }
}

pub fn classify(name: &str) -> TableClass {
    if name == SQLITE_SEQUENCE_TABLE || name == REGISTRY_TABLE {
        return TableClass::System;
    }
    if name.starts_with(NORMALIZED_PREFIX) {
        return TableClass::AlreadyMigrated;
    }
    if name.parse::<i64>().is_ok() {
        return TableClass::LegacyUser(GroupId::new(name));
    }
    match name.strip_prefix(LEGACY_AUCTION_PREFIX) {
        Some(group) => TableClass::LegacyAuction(GroupId::new(group)),
        None => TableClass::Ignored,
    }
}

/// A legacy table scheduled for migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyTable {
    /// Name as found in the catalog.
    pub source: String,
    pub group: GroupId,
    pub kind: EntityKind,
}

impl LegacyTable {
    pub fn source_table(&self) -> Result<TableName, StorageError> {
        TableName::new(self.source.clone())
    }

    pub fn target_table(&self) -> Result<TableName, StorageError> {
        self.kind.target_table(&self.group)
    }

    /// Target name for logs and reports, even when it is not a valid table.
    pub fn target_display(&self) -> String {
        match self.target_table() {
            Ok(t) => t.to_string(),
            Err(_) => format!("{NORMALIZED_PREFIX}{}_{}_info", self.group, self.kind.as_str()),
        }
    }
}

/// Result of a catalog scan. The two legacy lists are disjoint and keep
/// catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogScan {
    pub user_tables: Vec<LegacyTable>,
    pub auction_tables: Vec<LegacyTable>,
    /// Every other table with the reason it was skipped.
    pub skipped: Vec<(String, TableClass)>,
}

impl CatalogScan {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scan = Self::default();
        for name in names {
            let name = name.into();
            match classify(&name) {
                TableClass::LegacyUser(group) => scan.user_tables.push(LegacyTable {
                    source: name,
                    group,
                    kind: EntityKind::User,
                }),
                TableClass::LegacyAuction(group) => scan.auction_tables.push(LegacyTable {
                    source: name,
                    group,
                    kind: EntityKind::Auction,
                }),
                other => {
                    tracing::debug!(table = %name, class = ?other, "skipping table");
                    scan.skipped.push((name, other));
                }
            }
        }
        scan
    }

    /// User tables first, then auction tables.
    pub fn legacy_tables(&self) -> impl Iterator<Item = &LegacyTable> {
        self.user_tables.iter().chain(self.auction_tables.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.user_tables.is_empty() && self.auction_tables.is_empty()
    }
}

/// Read the catalog and classify every table.
pub fn scan_catalog(conn: &rusqlite::Connection) -> Result<CatalogScan, StorageError> {
    let names = list_tables(conn)?;
    let scan = CatalogScan::from_names(names);
    tracing::info!(
        user_tables = scan.user_tables.len(),
        auction_tables = scan.auction_tables.len(),
        skipped = scan.skipped.len(),
        "scanned table catalog"
    );
    Ok(scan)
}
