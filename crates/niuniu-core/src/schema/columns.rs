//! Column layouts of the tables the migration creates.
//!
//! The provisioner renders DDL from these; nothing else hardcodes a column
//! list for the target tables.

/// Secondary index attached to a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    None,
    /// `CREATE INDEX <table>_<column>_idx`
    Index,
    /// `CREATE UNIQUE INDEX <table>_<column>_uniq`
    Unique,
}

impl IndexKind {
    /// Index name suffix for `column`, or `None` when the column is unindexed.
    pub fn suffix(self, column: &str) -> Option<String> {
        match self {
            Self::None => None,
            Self::Index => Some(format!("{column}_idx")),
            Self::Unique => Some(format!("{column}_uniq")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDef {
    pub name: &'static str,
    /// Declared SQL type, including `PRIMARY KEY AUTOINCREMENT` for ids.
    pub sql_type: &'static str,
    /// Literal SQL default, if any.
    pub default: Option<&'static str>,
    pub index: IndexKind,
}

impl ColumnDef {
    const fn new(name: &'static str, sql_type: &'static str) -> Self {
        Self { name, sql_type, default: None, index: IndexKind::None }
    }

    const fn default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    const fn indexed(mut self, index: IndexKind) -> Self {
        self.index = index;
        self
    }

    /// Column clause for `CREATE TABLE` / `ALTER TABLE ... ADD COLUMN`.
    pub fn definition(&self) -> String {
        match self.default {
            Some(default) => format!("{} {} DEFAULT {}", self.name, self.sql_type, default),
            None => format!("{} {}", self.name, self.sql_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSchema {
    pub columns: &'static [ColumnDef],
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn indexed_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.index != IndexKind::None)
    }
}

const ID: ColumnDef = ColumnDef::new("id", "INTEGER PRIMARY KEY AUTOINCREMENT");
const CREATED_AT: ColumnDef = ColumnDef::new("created_at", "DATETIME");
const UPDATED_AT: ColumnDef = ColumnDef::new("updated_at", "DATETIME");
const USER_ID: ColumnDef = ColumnDef::new("user_id", "INTEGER").indexed(IndexKind::Index);

const fn counter(name: &'static str) -> ColumnDef {
    ColumnDef::new(name, "INTEGER").default("0")
}

/// `group_<N>_user_info`. `niu_id` is indexed but not unique here; uniqueness
/// is enforced by the registry.
pub const USER_INFO_SCHEMA: TableSchema = TableSchema {
    columns: &[
        ID,
        CREATED_AT,
        UPDATED_AT,
        ColumnDef::new("deleted_at", "DATETIME"),
        USER_ID,
        ColumnDef::new("niu_id", "CHAR(36)").indexed(IndexKind::Index),
        ColumnDef::new("length", "REAL").default("1"),
        counter("wei_ge"),
        counter("mei_yao"),
        counter("artifact"),
        counter("shen_ji"),
        counter("buff2"),
        counter("buff3"),
        counter("buff4"),
        counter("buff5"),
    ],
};

/// `group_<N>_auction_info`
pub const AUCTION_INFO_SCHEMA: TableSchema = TableSchema {
    columns: &[
        ID,
        CREATED_AT,
        UPDATED_AT,
        USER_ID,
        ColumnDef::new("niu_id", "VARCHAR(36)").indexed(IndexKind::Unique),
        ColumnDef::new("length", "REAL").default("0.01"),
        ColumnDef::new("money", "INTEGER"),
    ],
};

/// `niu_niu_managers`
pub const REGISTRY_SCHEMA: TableSchema = TableSchema {
    columns: &[
        ID,
        CREATED_AT,
        ColumnDef::new("niu_id", "VARCHAR(36)").indexed(IndexKind::Unique),
        ColumnDef::new("status", "INTEGER").default("0"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_semantics() {
        assert_eq!(USER_INFO_SCHEMA.column("length").unwrap().default, Some("1"));
        assert_eq!(AUCTION_INFO_SCHEMA.column("length").unwrap().default, Some("0.01"));
        assert_eq!(REGISTRY_SCHEMA.column("status").unwrap().default, Some("0"));
        assert_eq!(AUCTION_INFO_SCHEMA.column("money").unwrap().default, None);
    }

    #[test]
    fn niu_id_is_unique_only_for_auctions_and_registry() {
        assert_eq!(USER_INFO_SCHEMA.column("niu_id").unwrap().index, IndexKind::Index);
        assert_eq!(AUCTION_INFO_SCHEMA.column("niu_id").unwrap().index, IndexKind::Unique);
        assert_eq!(REGISTRY_SCHEMA.column("niu_id").unwrap().index, IndexKind::Unique);
    }

    #[test]
    fn column_definition_rendering() {
        assert_eq!(
            USER_INFO_SCHEMA.column("wei_ge").unwrap().definition(),
            "wei_ge INTEGER DEFAULT 0"
        );
        assert_eq!(IndexKind::Unique.suffix("niu_id").as_deref(), Some("niu_id_uniq"));
        assert_eq!(IndexKind::None.suffix("niu_id"), None);
    }
}
