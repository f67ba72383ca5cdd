use catalog_admin::MIGRATIONS;
use catalog_admin::db::{establish_connection_pool, run_pending_migrations};
use diesel_migrations::MigrationHarness;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn migrations_leave_nothing_pending() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    let pending = conn
        .pending_migrations(MIGRATIONS)
        .expect("should list pending migrations");

    assert!(pending.is_empty());
}

#[test]
fn run_pending_migrations_applies_each_migration_once() {
    let tempfile = NamedTempFile::new().expect("Failed to create temp file");
    let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
        .expect("Failed to establish SQLite connection.");

    let applied = run_pending_migrations(&pool).expect("first run should migrate");
    assert_eq!(applied, 2);

    let applied = run_pending_migrations(&pool).expect("second run should succeed");
    assert_eq!(applied, 0);
}
