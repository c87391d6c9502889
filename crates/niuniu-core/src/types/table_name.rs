//! Validated table names.
//!
//! Table names in this database encode the group they belong to, so they are
//! spliced into DDL and DML. Every name passes through `TableName`, which only
//! admits ASCII alphanumerics and underscores and always renders quoted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{AUCTION_INFO_SUFFIX, NORMALIZED_PREFIX, USER_INFO_SUFFIX};
use crate::errors::StorageError;

/// A table name that is safe to splice into a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    pub fn new(name: impl Into<String>) -> Result<Self, StorageError> {
        let name = name.into();
        if is_valid_identifier(&name) {
            Ok(Self(name))
        } else {
            Err(StorageError::InvalidTableName { name })
        }
    }

    /// `group_<group>_user_info`
    pub fn user_info(group: &GroupId) -> Result<Self, StorageError> {
        Self::new(format!("{NORMALIZED_PREFIX}{}{USER_INFO_SUFFIX}", group.as_str()))
    }

    /// `group_<group>_auction_info`
    pub fn auction_info(group: &GroupId) -> Result<Self, StorageError> {
        Self::new(format!("{NORMALIZED_PREFIX}{}{AUCTION_INFO_SUFFIX}", group.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Double-quoted identifier for use in SQL text.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }

    /// Quoted name of an index owned by this table: `"<table>_<suffix>"`.
    pub fn index_name(&self, suffix: &str) -> String {
        format!("\"{}_{}\"", self.0, suffix)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TableName {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableName> for String {
    fn from(name: TableName) -> Self {
        name.0
    }
}

/// The group a legacy table was sharded under, as it appears in table names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(group: impl Into<String>) -> Self {
        Self(group.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_names_follow_group_convention() {
        let group = GroupId::new("42");
        assert_eq!(TableName::user_info(&group).unwrap().as_str(), "group_42_user_info");
        assert_eq!(
            TableName::auction_info(&group).unwrap().as_str(),
            "group_42_auction_info"
        );
    }

    #[test]
    fn quoting_and_index_names() {
        let t = TableName::new("123456").unwrap();
        assert_eq!(t.quoted(), "\"123456\"");
        assert_eq!(t.index_name("user_id_idx"), "\"123456_user_id_idx\"");
    }

    #[test]
    fn rejects_names_that_could_break_out_of_quotes() {
        for bad in ["", "a b", "x\"; DROP TABLE y; --", "auction-1", "名字"] {
            assert!(
                matches!(TableName::new(bad), Err(StorageError::InvalidTableName { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn negative_group_is_rejected_in_target_name() {
        // "-5" parses as an integer but cannot name a normalized table.
        let group = GroupId::new("-5");
        assert!(TableName::user_info(&group).is_err());
    }
}
