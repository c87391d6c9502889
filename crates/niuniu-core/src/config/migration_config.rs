//! Migration behavior switches.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MigrationConfig {
    /// Drop each legacy table after all of its rows migrated. Default: true.
    pub drop_legacy: Option<bool>,
    /// Classify and count, but write nothing. Default: false.
    pub dry_run: Option<bool>,
}

impl MigrationConfig {
    pub fn effective_drop_legacy(&self) -> bool {
        self.drop_legacy.unwrap_or(true)
    }

    pub fn effective_dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }
}
