//! Core types, errors, config, and tracing for the niuniu table migration.
//!
//! Storage access lives in `niuniu-storage`; this crate only describes the
//! shapes being migrated and the ambient plumbing shared by every crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod schema;
pub mod tracing;
pub mod types;
