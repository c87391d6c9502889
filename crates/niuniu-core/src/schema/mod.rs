//! Schema definitions: legacy row shapes, normalized record shapes, the
//! registry entry, and the column-level layout of every target table.

pub mod columns;
pub mod kind;
pub mod legacy;
pub mod normalized;
pub mod registry;
pub mod timestamp;

pub use columns::{ColumnDef, IndexKind, TableSchema};
pub use kind::EntityKind;
pub use legacy::{LegacyAuctionRow, LegacyUserRow};
pub use normalized::{NormalizedAuctionRecord, NormalizedUserRecord};
pub use registry::RegistryEntry;
