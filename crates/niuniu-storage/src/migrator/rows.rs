//! Per-kind row handling plugged into the generic table migrator.

use chrono::{DateTime, Utc};
use niuniu_core::errors::StorageError;
use niuniu_core::schema::{
    EntityKind, LegacyAuctionRow, LegacyUserRow, NormalizedAuctionRecord, NormalizedUserRecord,
};
use niuniu_core::types::{NiuId, TableName};
use rusqlite::Connection;

use crate::queries::{auction_info, legacy, user_info};

/// How one entity kind reads its legacy rows and writes normalized records.
pub trait RowMigration {
    type Legacy;

    const KIND: EntityKind;

    fn read(conn: &Connection, source: &TableName) -> Result<Vec<Self::Legacy>, StorageError>;

    fn insert(
        conn: &Connection,
        target: &TableName,
        row: &Self::Legacy,
        niu_id: NiuId,
        now: DateTime<Utc>,
    ) -> Result<(), StorageError>;
}

pub struct UserRows;

impl RowMigration for UserRows {
    type Legacy = LegacyUserRow;

    const KIND: EntityKind = EntityKind::User;

    fn read(conn: &Connection, source: &TableName) -> Result<Vec<LegacyUserRow>, StorageError> {
        legacy::read_user_rows(conn, source)
    }

    fn insert(
        conn: &Connection,
        target: &TableName,
        row: &LegacyUserRow,
        niu_id: NiuId,
        now: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let record = NormalizedUserRecord::from_legacy(row, niu_id, now);
        user_info::insert_user_record(conn, target, &record).map(|_| ())
    }
}

pub struct AuctionRows;

impl RowMigration for AuctionRows {
    type Legacy = LegacyAuctionRow;

    const KIND: EntityKind = EntityKind::Auction;

    fn read(conn: &Connection, source: &TableName) -> Result<Vec<LegacyAuctionRow>, StorageError> {
        legacy::read_auction_rows(conn, source)
    }

    fn insert(
        conn: &Connection,
        target: &TableName,
        row: &LegacyAuctionRow,
        niu_id: NiuId,
        now: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        tracing::trace!(legacy_id = row.id, "migrating auction row");
        let record = NormalizedAuctionRecord::from_legacy(row, niu_id, now);
        auction_info::insert_auction_record(conn, target, &record).map(|_| ())
    }
}
