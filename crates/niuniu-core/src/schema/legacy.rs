//! Row shapes of the legacy per-group tables.
//!
//! Legacy tables were written by an ORM that filled absent or NULL columns
//! with zero values, so every field here is plain (non-optional) and a
//! missing column reads as 0.

/// One row of a legacy user table (named by the bare group number).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyUserRow {
    /// `UID`: the external user key.
    pub uid: i64,
    /// `Length`
    pub length: f64,
    /// `UserCount`. No normalized counterpart.
    pub user_count: i64,
    /// `WeiGe`
    pub wei_ge: i64,
    /// `Philter`, renamed to `mei_yao` on migration.
    pub philter: i64,
    /// `Artifact`
    pub artifact: i64,
    /// `ShenJi`
    pub shen_ji: i64,
    /// `Buff1`. No normalized counterpart.
    pub buff1: i64,
    pub buff2: i64,
    pub buff3: i64,
    pub buff4: i64,
    pub buff5: i64,
}

/// One row of a legacy `auction_<N>` table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyAuctionRow {
    /// Legacy auction id. Not carried over; the normalized table assigns its own.
    pub id: i64,
    pub user_id: i64,
    pub length: f64,
    pub money: i64,
}
