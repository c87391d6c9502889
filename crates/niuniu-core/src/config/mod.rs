//! Configuration for the migration run.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod database_config;
pub mod logging_config;
pub mod migrate_config;
pub mod migration_config;

pub use database_config::DatabaseConfig;
pub use logging_config::LoggingConfig;
pub use migrate_config::{CliOverrides, MigrateConfig};
pub use migration_config::MigrationConfig;
