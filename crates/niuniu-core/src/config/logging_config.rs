//! Logging configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_FILTER: &str = "niuniu=info";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `NIUNIU_LOG` is unset. Default: `niuniu=info`.
    pub filter: Option<String>,
}

impl LoggingConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
