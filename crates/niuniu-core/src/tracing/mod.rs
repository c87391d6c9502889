//! Observability: `tracing` with an `EnvFilter` read from `NIUNIU_LOG`.
//!
//! Migration events carry `table` (legacy name), `new_table` (normalized
//! name), `rows`, and `status` fields.

pub mod setup;

pub use setup::{init_tracing, LOG_ENV};
