//! Typed queries, one module per table family.

pub mod auction_info;
pub mod legacy;
pub mod registry;
pub mod user_info;
pub(crate) mod value;
