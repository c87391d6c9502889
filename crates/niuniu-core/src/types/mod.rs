//! Identifier and name types shared across crates.

pub mod identifiers;
pub mod status;
pub mod table_name;

pub use identifiers::NiuId;
pub use status::NiuStatus;
pub use table_name::{GroupId, TableName};
