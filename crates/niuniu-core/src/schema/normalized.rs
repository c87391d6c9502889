//! Normalized record shapes written to `group_<N>_*_info` tables.

use chrono::{DateTime, Utc};

use super::legacy::{LegacyAuctionRow, LegacyUserRow};
use crate::types::NiuId;

/// Column default of `group_<N>_user_info.length`.
pub const USER_LENGTH_DEFAULT: f64 = 1.0;

/// Column default of `group_<N>_auction_info.length`.
pub const AUCTION_LENGTH_DEFAULT: f64 = 0.01;

/// A zero legacy length was never set; the legacy writer left such fields to
/// the column default.
fn length_or_default(length: f64, default: f64) -> f64 {
    if length == 0.0 {
        default
    } else {
        length
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedUserRecord {
    /// Auto-increment id; `None` until inserted.
    pub id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub user_id: i64,
    pub niu_id: NiuId,
    pub length: f64,
    pub wei_ge: i64,
    pub mei_yao: i64,
    pub artifact: i64,
    pub shen_ji: i64,
    pub buff2: i64,
    pub buff3: i64,
    pub buff4: i64,
    pub buff5: i64,
}

impl NormalizedUserRecord {
    /// Map a legacy row field by field. `Philter` becomes `mei_yao`;
    /// `UserCount` and `Buff1` are dropped.
    pub fn from_legacy(row: &LegacyUserRow, niu_id: NiuId, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            user_id: row.uid,
            niu_id,
            length: length_or_default(row.length, USER_LENGTH_DEFAULT),
            wei_ge: row.wei_ge,
            mei_yao: row.philter,
            artifact: row.artifact,
            shen_ji: row.shen_ji,
            buff2: row.buff2,
            buff3: row.buff3,
            buff4: row.buff4,
            buff5: row.buff5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAuctionRecord {
    pub id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: i64,
    pub niu_id: NiuId,
    pub length: f64,
    pub money: i64,
}

impl NormalizedAuctionRecord {
    pub fn from_legacy(row: &LegacyAuctionRow, niu_id: NiuId, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            created_at: now,
            updated_at: now,
            user_id: row.user_id,
            niu_id,
            length: length_or_default(row.length, AUCTION_LENGTH_DEFAULT),
            money: row.money,
        }
    }
}
