//! The two entity kinds the migration produces.

use serde::{Deserialize, Serialize};

use super::columns::{TableSchema, AUCTION_INFO_SCHEMA, USER_INFO_SCHEMA};
use crate::errors::StorageError;
use crate::types::{GroupId, NiuStatus, TableName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Auction,
}

impl EntityKind {
    pub fn schema(self) -> &'static TableSchema {
        match self {
            Self::User => &USER_INFO_SCHEMA,
            Self::Auction => &AUCTION_INFO_SCHEMA,
        }
    }

    /// Status written to the registry for every record of this kind.
    pub fn registry_status(self) -> NiuStatus {
        match self {
            Self::User => NiuStatus::Normal,
            Self::Auction => NiuStatus::InAuction,
        }
    }

    pub fn target_table(self, group: &GroupId) -> Result<TableName, StorageError> {
        match self {
            Self::User => TableName::user_info(group),
            Self::Auction => TableName::auction_info(group),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Auction => "auction",
        }
    }
}
