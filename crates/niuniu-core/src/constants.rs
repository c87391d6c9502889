//! Fixed names and formats of the niuniu database.

/// SQLite's internal AUTOINCREMENT bookkeeping table.
pub const SQLITE_SEQUENCE_TABLE: &str = "sqlite_sequence";

/// Central registry mapping every niu id to its lifecycle status.
pub const REGISTRY_TABLE: &str = "niu_niu_managers";

/// Prefix carried by every normalized (already migrated) table.
pub const NORMALIZED_PREFIX: &str = "group_";

/// Prefix of legacy auction tables: `auction_<group>`.
pub const LEGACY_AUCTION_PREFIX: &str = "auction_";

/// Suffix of normalized user tables: `group_<group>_user_info`.
pub const USER_INFO_SUFFIX: &str = "_user_info";

/// Suffix of normalized auction tables: `group_<group>_auction_info`.
pub const AUCTION_INFO_SUFFIX: &str = "_auction_info";

/// Default database location used by the niuniu plugin.
pub const DEFAULT_DB_PATH: &str = "data/niuniu/niuniu.db";

/// Default busy timeout for the migration connection, in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Textual DATETIME layout written to `created_at` / `updated_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";
