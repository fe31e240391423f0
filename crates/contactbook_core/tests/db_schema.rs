use contactbook_core::db::schema::latest_version;
use contactbook_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_contacts_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "contacts");
}

#[test]
fn open_db_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phonebook.sqlite3");
    assert!(!path.exists());

    let conn = open_db(&path).unwrap();
    drop(conn);

    assert!(path.exists());
}

#[test]
fn opening_same_database_twice_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phonebook.sqlite3");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO contacts (name, phone_number, email) VALUES ('Alice', '555-1111', '');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(schema_version(&conn_second), latest_version());
}

#[test]
fn existing_unversioned_table_is_adopted_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE contacts (
            id INTEGER PRIMARY KEY,
            name TEXT,
            phone_number TEXT,
            email TEXT
        );
        INSERT INTO contacts (name, phone_number, email) VALUES ('Bob', '555-2222', '');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let name: String = conn
        .query_row("SELECT name FROM contacts WHERE id = 1;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(name, "Bob");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "contact book file uses contacts schema v999; this build reads up to v{}",
            latest_version()
        )
    );
    match err {
        DbError::NewerContactSchema {
            file_version,
            supported_version,
        } => {
            assert_eq!(file_version, 999);
            assert_eq!(supported_version, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
