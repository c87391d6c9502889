//! `NiuId`: the 128-bit linking key between a normalized record and its
//! registry entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique identifier of a migrated niuniu.
///
/// Stored as the hyphenated textual UUID (36 chars) in every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NiuId(Uuid);

impl NiuId {
    /// Mint a fresh random (v4) identifier. Callable from any thread.
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Hyphenated lowercase form, as persisted.
    pub fn to_db_string(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl fmt::Display for NiuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for NiuId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for NiuId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
