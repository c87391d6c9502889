//! Shared fixtures: legacy tables shaped the way the old bot wrote them.
#![allow(dead_code)]

use niuniu_core::schema::{LegacyAuctionRow, LegacyUserRow};
use niuniu_core::types::TableName;
use rusqlite::{params, Connection};

pub fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
    conn
}

pub fn table(name: &str) -> TableName {
    TableName::new(name).unwrap()
}

pub fn create_legacy_user_table(conn: &Connection, name: &str) {
    conn.execute_batch(&format!(
        "CREATE TABLE \"{name}\" (
            UID INTEGER, Length REAL, UserCount INTEGER, WeiGe INTEGER, Philter INTEGER,
            Artifact INTEGER, ShenJi INTEGER, Buff1 INTEGER, Buff2 INTEGER, Buff3 INTEGER,
            Buff4 INTEGER, Buff5 INTEGER
        );"
    ))
    .unwrap();
}

pub fn insert_legacy_user(conn: &Connection, name: &str, row: &LegacyUserRow) {
    conn.execute(
        &format!(
            "INSERT INTO \"{name}\" (UID, Length, UserCount, WeiGe, Philter, Artifact, ShenJi,
                Buff1, Buff2, Buff3, Buff4, Buff5)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"
        ),
        params![
            row.uid, row.length, row.user_count, row.wei_ge, row.philter, row.artifact,
            row.shen_ji, row.buff1, row.buff2, row.buff3, row.buff4, row.buff5
        ],
    )
    .unwrap();
}

/// A legacy user table with `n` rows; UID = 1000 + i, Length = i + 0.5.
pub fn seed_user_table(conn: &Connection, name: &str, n: usize) {
    create_legacy_user_table(conn, name);
    for i in 0..n {
        insert_legacy_user(
            conn,
            name,
            &LegacyUserRow {
                uid: 1000 + i as i64,
                length: i as f64 + 0.5,
                wei_ge: i as i64,
                philter: (i * 2) as i64,
                ..Default::default()
            },
        );
    }
}

pub fn create_legacy_auction_table(conn: &Connection, name: &str) {
    conn.execute_batch(&format!(
        "CREATE TABLE \"{name}\" (
            id INTEGER PRIMARY KEY, user_id INTEGER, length REAL, money INTEGER
        );"
    ))
    .unwrap();
}

pub fn insert_legacy_auction(conn: &Connection, name: &str, row: &LegacyAuctionRow) {
    conn.execute(
        &format!("INSERT INTO \"{name}\" (id, user_id, length, money) VALUES (?1, ?2, ?3, ?4)"),
        params![row.id, row.user_id, row.length, row.money],
    )
    .unwrap();
}

pub fn seed_auction_table(conn: &Connection, name: &str, n: usize) {
    create_legacy_auction_table(conn, name);
    for i in 0..n {
        insert_legacy_auction(
            conn,
            name,
            &LegacyAuctionRow {
                id: i as i64 + 1,
                user_id: 500 + i as i64,
                length: 2.0 + i as f64,
                money: 100 * (i as i64 + 1),
            },
        );
    }
}

pub fn table_exists(conn: &Connection, name: &str) -> bool {
    niuniu_storage::introspect::has_table(conn, &table(name)).unwrap()
}

/// `(name, unique)` for every index on `table`.
pub fn indexes(conn: &Connection, name: &str) -> Vec<(String, bool)> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA index_list(\"{name}\")"))
        .unwrap();
    let mut out: Vec<(String, bool)> = stmt
        .query_map([], |row| Ok((row.get::<_, String>(1)?, row.get::<_, i64>(2)? == 1)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    out.sort();
    out
}

/// Make inserts into `target` abort when `user_id` equals `poison`.
pub fn poison_target(conn: &Connection, target: &str, poison: i64) {
    conn.execute_batch(&format!(
        "CREATE TRIGGER \"{target}_poison\" BEFORE INSERT ON \"{target}\"
         WHEN NEW.user_id = {poison}
         BEGIN SELECT RAISE(ABORT, 'poisoned row'); END;"
    ))
    .unwrap();
}
