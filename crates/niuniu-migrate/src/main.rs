//! niuniu-migrate: one-shot migration of legacy niuniu group tables.
//!
//! ```bash
//! # migrate the default database (data/niuniu/niuniu.db)
//! niuniu-migrate
//!
//! # see what would be migrated, without writing
//! niuniu-migrate --db /srv/bot/niuniu.db --dry-run
//!
//! # migrate but keep the legacy tables around
//! niuniu-migrate --keep-legacy --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

mod output;

use niuniu_core::config::{CliOverrides, MigrateConfig};
use niuniu_core::errors::ErrorCode;
use niuniu_core::tracing::init_tracing;
use niuniu_storage::{Database, MigrationOptions, MigrationRunner};

#[derive(Parser)]
#[command(name = "niuniu-migrate")]
#[command(about = "Migrate legacy per-group niuniu tables into the normalized schema", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite database file (overrides config and NIUNIU_DB_PATH)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Config file (default: ./niuniu-migrate.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep legacy tables after migrating them
    #[arg(long, default_value = "false")]
    keep_legacy: bool,

    /// Classify and count legacy tables without writing anything
    #[arg(long, default_value = "false")]
    dry_run: bool,

    /// Print the report as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        db_path: cli.db.clone(),
        keep_legacy: cli.keep_legacy,
        dry_run: cli.dry_run,
    };
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match MigrateConfig::load(&cwd, cli.config.as_deref(), Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.logging.effective_filter());

    let db = match Database::open_with_config(&config.database) {
        Ok(db) => db,
        Err(e) => {
            error!(error_code = e.error_code(), "{e}");
            return ExitCode::FAILURE;
        }
    };
    info!(path = %config.database.effective_path().display(), "opened database");

    let runner = MigrationRunner::new(db.conn(), MigrationOptions::from(&config.migration));

    if config.migration.effective_dry_run() {
        return match runner.plan() {
            Ok(plan) => {
                output::print_plan(&plan, cli.json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error_code = e.error_code(), "{e}");
                ExitCode::FAILURE
            }
        };
    }

    match runner.run() {
        Ok(report) => {
            output::print_report(&report, cli.json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error_code = e.error_code(), "{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_migrate_and_drop() {
        let cli = Cli::try_parse_from(["niuniu-migrate"]).unwrap();
        assert!(cli.db.is_none());
        assert!(!cli.keep_legacy);
        assert!(!cli.dry_run);
        assert!(!cli.json);
    }

    #[test]
    fn all_flags_parse() {
        let cli = Cli::try_parse_from([
            "niuniu-migrate",
            "--db",
            "/tmp/bot.db",
            "-c",
            "alt.toml",
            "--keep-legacy",
            "--dry-run",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/bot.db")));
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(cli.keep_legacy && cli.dry_run && cli.json);
    }
}
