// Integration tests for the migration framework

use gymadmin_store::migrations::{applied_migrations, apply_migrations, get_migrations};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    apply_migrations(&mut conn).expect("Migrations should succeed");

    assert_eq!(table_names(&conn), vec!["kv_entries", "schema_version"]);
}

#[test]
fn test_every_embedded_migration_is_recorded_with_checksum() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    let recorded = applied_migrations(&conn).unwrap();
    let embedded: Vec<&str> = get_migrations().iter().map(|m| m.id).collect();
    assert_eq!(recorded, embedded);

    let missing_checksums: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM schema_version WHERE checksum IS NULL OR length(checksum) != 64",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(missing_checksums, 0);
}

#[test]
fn test_migrations_idempotent() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, get_migrations().len() as i64);
}

#[test]
fn test_tampered_checksum_fails() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_kv_schema'",
        [],
    )
    .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert_eq!(err.code(), "ERR_CORRUPT_STATE");
    assert_eq!(err.op(), Some("migration_checksum"));
}
