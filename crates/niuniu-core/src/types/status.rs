//! Registry lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle status stored in the registry's `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NiuStatus {
    /// Owned by a user in a group.
    Normal,
    /// Listed in a group auction.
    InAuction,
    /// Reserved. Never written by the migration.
    Retired,
}

impl NiuStatus {
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Normal => 0,
            Self::InAuction => 1,
            Self::Retired => 2,
        }
    }

    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Normal),
            1 => Some(Self::InAuction),
            2 => Some(Self::Retired),
            _ => None,
        }
    }
}

impl Default for NiuStatus {
    fn default() -> Self {
        Self::Normal
    }
}
