//! Run report serialization and the dry-run plan.

mod common;

use common::*;
use niuniu_core::schema::EntityKind;
use niuniu_storage::provision::ensure_target_table;
use niuniu_storage::{MigrationOptions, MigrationRunner, TablePlan};
use serde_json::json;

#[test]
fn report_serializes_flat_outcomes() {
    let conn = setup_db();
    seed_user_table(&conn, "1", 2);

    let report = MigrationRunner::new(&conn, MigrationOptions::default()).run().unwrap();

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "tables": [{
                "source": "1",
                "target": "group_1_user_info",
                "kind": "user",
                "rows_migrated": 2,
                "status": "migrated"
            }]
        })
    );
}

#[test]
fn failed_outcome_carries_coded_error() {
    let conn = setup_db();
    seed_user_table(&conn, "2", 3);
    ensure_target_table(&conn, &table("group_2_user_info"), EntityKind::User).unwrap();
    poison_target(&conn, "group_2_user_info", 1000);

    let report = MigrationRunner::new(&conn, MigrationOptions::default()).run().unwrap();
    let value = serde_json::to_value(&report).unwrap();
    let outcome = &value["tables"][0];

    assert_eq!(outcome["status"], "failed");
    assert_eq!(outcome["rows_migrated"], 0);
    let error = outcome["error"].as_str().unwrap();
    assert!(error.starts_with("[ROW_WRITE_FAILED] failed to write row 1 from 2"), "{error}");
}

#[test]
fn retained_status_serializes() {
    let conn = setup_db();
    seed_auction_table(&conn, "auction_3", 1);

    let report = MigrationRunner::new(&conn, MigrationOptions { drop_legacy: false })
        .run()
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["tables"][0]["status"], "retained");
    assert_eq!(value["tables"][0]["kind"], "auction");
    assert!(value["tables"][0].get("error").is_none());
}

#[test]
fn plan_counts_rows_without_writing() {
    let conn = setup_db();
    seed_user_table(&conn, "10", 4);
    seed_auction_table(&conn, "auction_10", 2);
    ensure_target_table(&conn, &table("group_10_auction_info"), EntityKind::Auction).unwrap();

    let plan = MigrationRunner::new(&conn, MigrationOptions::default()).plan().unwrap();

    assert_eq!(
        plan,
        vec![
            TablePlan {
                source: "10".into(),
                target: "group_10_user_info".into(),
                kind: EntityKind::User,
                legacy_rows: Some(4),
                target_exists: false,
            },
            TablePlan {
                source: "auction_10".into(),
                target: "group_10_auction_info".into(),
                kind: EntityKind::Auction,
                legacy_rows: Some(2),
                target_exists: true,
            },
        ]
    );
    assert!(!table_exists(&conn, "niu_niu_managers"));
    assert!(!table_exists(&conn, "group_10_user_info"));
    assert!(table_exists(&conn, "10"));
    assert!(table_exists(&conn, "auction_10"));
}

#[test]
fn plan_marks_uncountable_tables() {
    let conn = setup_db();
    seed_user_table(&conn, "-3", 1);

    let plan = MigrationRunner::new(&conn, MigrationOptions::default()).plan().unwrap();

    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].legacy_rows, None);
    assert_eq!(plan[0].target, "group_-3_user_info");
    assert!(!plan[0].target_exists);
    assert_eq!(
        serde_json::to_value(&plan[0]).unwrap(),
        json!({
            "source": "-3",
            "target": "group_-3_user_info",
            "kind": "user",
            "legacy_rows": null,
            "target_exists": false
        })
    );
}
