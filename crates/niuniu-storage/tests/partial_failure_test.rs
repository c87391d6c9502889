//! Failures confined to one table: committed rows stay, the legacy table
//! stays, and other tables carry on.

mod common;

use common::*;
use niuniu_core::errors::{ErrorCode, MigrationError};
use niuniu_core::schema::EntityKind;
use niuniu_storage::provision::{ensure_registry_table, ensure_target_table};
use niuniu_storage::queries::{auction_info, legacy, registry, user_info};
use niuniu_storage::{MigrationOptions, MigrationRunner, TableStatus};

#[test]
fn row_failure_keeps_earlier_rows_and_legacy_table() {
    let conn = setup_db();
    seed_user_table(&conn, "100", 10);
    seed_user_table(&conn, "200", 4);
    let target = table("group_100_user_info");
    ensure_target_table(&conn, &target, EntityKind::User).unwrap();
    // Third legacy row has UID 1002.
    poison_target(&conn, "group_100_user_info", 1002);

    let report = MigrationRunner::new(&conn, MigrationOptions::default()).run().unwrap();

    let failed = report.outcome("100").unwrap();
    assert_eq!(failed.rows_migrated, 2);
    match &failed.status {
        TableStatus::Failed { error: MigrationError::RowWrite { row, source_table, target_table, .. } } => {
            assert_eq!(*row, 3);
            assert_eq!(source_table, "100");
            assert_eq!(target_table, "group_100_user_info");
        }
        other => panic!("expected row write failure, got {other:?}"),
    }
    assert!(!failed.status.rows_complete());

    assert_eq!(user_info::count(&conn, &target).unwrap(), 2);
    assert_eq!(legacy::count_rows(&conn, &table("100")).unwrap(), 10);

    let ok = report.outcome("200").unwrap();
    assert_eq!(ok.status, TableStatus::Migrated);
    assert_eq!(ok.rows_migrated, 4);
    assert!(!table_exists(&conn, "200"));

    assert_eq!(registry::count(&conn).unwrap(), 6);
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.migrated_count(), 1);
    assert!(!report.is_clean());
}

#[test]
fn retry_after_row_failure_appends_again() {
    let conn = setup_db();
    seed_user_table(&conn, "100", 10);
    let target = table("group_100_user_info");
    ensure_target_table(&conn, &target, EntityKind::User).unwrap();
    poison_target(&conn, "group_100_user_info", 1002);
    let runner = MigrationRunner::new(&conn, MigrationOptions::default());
    runner.run().unwrap();

    conn.execute_batch("DROP TRIGGER \"group_100_user_info_poison\";").unwrap();
    let retry = runner.run().unwrap();

    // Rows committed by the first attempt are not deduplicated.
    assert_eq!(retry.outcome("100").unwrap().status, TableStatus::Migrated);
    assert_eq!(user_info::count(&conn, &target).unwrap(), 12);
    assert_eq!(user_info::count_by_user(&conn, &target, 1000).unwrap(), 2);
    assert_eq!(registry::count(&conn).unwrap(), 12);
}

#[test]
fn registry_failure_leaves_no_orphan_record() {
    let conn = setup_db();
    seed_user_table(&conn, "300", 5);
    ensure_registry_table(&conn).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER registry_cap BEFORE INSERT ON niu_niu_managers
         WHEN (SELECT COUNT(*) FROM niu_niu_managers) >= 2
         BEGIN SELECT RAISE(ABORT, 'registry full'); END;",
    )
    .unwrap();

    let report = MigrationRunner::new(&conn, MigrationOptions::default()).run().unwrap();

    let outcome = report.outcome("300").unwrap();
    assert_eq!(outcome.rows_migrated, 2);
    let error = outcome.status.error().unwrap();
    assert_eq!(error.error_code(), "ROW_WRITE_FAILED");
    assert!(error.to_string().contains("registry full"));

    // The third record was rolled back with its registry entry.
    assert_eq!(user_info::count(&conn, &table("group_300_user_info")).unwrap(), 2);
    assert_eq!(registry::count(&conn).unwrap(), 2);
    assert!(table_exists(&conn, "300"));
}

#[test]
fn drop_failure_is_reported_after_rows_commit() {
    let conn = setup_db();
    seed_auction_table(&conn, "auction_9", 2);
    conn.execute_batch(
        "CREATE TABLE bids (id INTEGER PRIMARY KEY, auction_id INTEGER REFERENCES auction_9(id));
         INSERT INTO bids (auction_id) VALUES (1);",
    )
    .unwrap();

    let report = MigrationRunner::new(&conn, MigrationOptions::default()).run().unwrap();

    let outcome = report.outcome("auction_9").unwrap();
    assert_eq!(outcome.rows_migrated, 2);
    match &outcome.status {
        TableStatus::DropFailed { error } => {
            assert!(matches!(error, MigrationError::LegacyDrop { table, .. } if table == "auction_9"));
            assert!(!error.is_fatal());
        }
        other => panic!("expected drop failure, got {other:?}"),
    }
    assert!(outcome.status.rows_complete());
    assert_eq!(report.migrated_count(), 1);
    assert_eq!(report.failed_count(), 1);

    assert!(table_exists(&conn, "auction_9"));
    assert_eq!(
        auction_info::count(&conn, &table("group_9_auction_info")).unwrap(),
        2
    );
    assert_eq!(registry::count(&conn).unwrap(), 2);
}

#[test]
fn unreadable_legacy_table_fails_before_provisioning() {
    let conn = setup_db();
    conn.execute_batch(
        "CREATE TABLE \"41\" (UID INTEGER, Length BLOB);
         INSERT INTO \"41\" VALUES (1, x'00ff');",
    )
    .unwrap();

    let report = MigrationRunner::new(&conn, MigrationOptions::default()).run().unwrap();

    let outcome = report.outcome("41").unwrap();
    assert!(matches!(
        outcome.status,
        TableStatus::Failed { error: MigrationError::RowRead { .. } }
    ));
    assert!(!table_exists(&conn, "group_41_user_info"));
    assert!(table_exists(&conn, "41"));
}
