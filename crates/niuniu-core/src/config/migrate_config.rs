//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DatabaseConfig, LoggingConfig, MigrationConfig};
use crate::errors::ConfigError;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "niuniu-migrate.toml";

pub const ENV_DB_PATH: &str = "NIUNIU_DB_PATH";
pub const ENV_DROP_LEGACY: &str = "NIUNIU_DROP_LEGACY";
pub const ENV_DRY_RUN: &str = "NIUNIU_DRY_RUN";

/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`NIUNIU_*`)
/// 3. Config file (`--config`, else `niuniu-migrate.toml` in the working dir)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MigrateConfig {
    pub database: DatabaseConfig,
    pub migration: MigrationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db_path: Option<PathBuf>,
    pub keep_legacy: bool,
    pub dry_run: bool,
}

impl MigrateConfig {
    /// Load configuration. `config_path` must exist when given explicitly;
    /// the implicit file in `cwd` is optional.
    pub fn load(
        cwd: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let implicit = cwd.join(DEFAULT_CONFIG_FILE);
                if implicit.exists() {
                    Self::from_file(&implicit)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.effective_path().as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "database.path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.database.busy_timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "database.busy_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Unparseable boolean values are ignored.
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(ENV_DB_PATH) {
            self.database.path = Some(PathBuf::from(path));
        }
        if let Some(drop) = env_bool(ENV_DROP_LEGACY) {
            self.migration.drop_legacy = Some(drop);
        }
        if let Some(dry) = env_bool(ENV_DRY_RUN) {
            self.migration.dry_run = Some(dry);
        }
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref path) = cli.db_path {
            self.database.path = Some(path.clone());
        }
        if cli.keep_legacy {
            self.migration.drop_legacy = Some(false);
        }
        if cli.dry_run {
            self.migration.dry_run = Some(true);
        }
    }
}

fn env_bool(key: &str) -> Option<bool> {
    let value = std::env::var(key).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
