//! Human and JSON rendering of plans and reports.

use niuniu_storage::{MigrationReport, TablePlan, TableStatus};

pub fn print_plan(plan: &[TablePlan], json: bool) {
    if json {
        print_json(plan);
        return;
    }
    if plan.is_empty() {
        println!("no legacy tables found");
        return;
    }
    for table in plan {
        let rows = table
            .legacy_rows
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string());
        let note = if table.target_exists { " (target exists, will append)" } else { "" };
        println!(
            "{:<8} {} -> {}  {} rows{}",
            table.kind.as_str(),
            table.source,
            table.target,
            rows,
            note
        );
    }
}

pub fn print_report(report: &MigrationReport, json: bool) {
    if json {
        print_json(report);
        return;
    }
    for outcome in &report.tables {
        match &outcome.status {
            TableStatus::Failed { error } | TableStatus::DropFailed { error } => println!(
                "{:<11} {} -> {}  {} rows  {}",
                outcome.status.as_str(),
                outcome.source,
                outcome.target,
                outcome.rows_migrated,
                error
            ),
            _ => println!(
                "{:<11} {} -> {}  {} rows",
                outcome.status.as_str(),
                outcome.source,
                outcome.target,
                outcome.rows_migrated
            ),
        }
    }
    println!(
        "{} tables migrated, {} failed, {} rows",
        report.migrated_count(),
        report.failed_count(),
        report.total_rows()
    );
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("failed to serialize report: {e}"),
    }
}
