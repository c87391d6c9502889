//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target log directives,
/// e.g. `NIUNIU_LOG=niuniu_storage=debug`.
pub const LOG_ENV: &str = "NIUNIU_LOG";

/// Initialize logging. `default_filter` applies when `NIUNIU_LOG` is unset
/// or invalid. Idempotent.
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("niuniu=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
