//! Registry entries (`niu_niu_managers`).

use chrono::{DateTime, Utc};

use crate::types::{NiuId, NiuStatus};

/// One row of the registry. There is no entity-kind column: the status is
/// the only hint whether the id belongs to a user or an auction record.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub niu_id: NiuId,
    pub status: NiuStatus,
}

impl RegistryEntry {
    pub fn new(niu_id: NiuId, status: NiuStatus, now: DateTime<Utc>) -> Self {
        Self { id: None, created_at: now, niu_id, status }
    }
}
