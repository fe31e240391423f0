//! Contacts schema bootstrap.
//!
//! # Responsibility
//! - Create the `contacts` table when it is missing.
//! - Refuse databases stamped by a newer build.
//!
//! # Invariants
//! - Bootstrap is idempotent: existing rows are never touched.
//! - A table created without `AUTOINCREMENT` by an older build is accepted
//!   as-is; no columns are rewritten.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

const SCHEMA_VERSION: u32 = 1;
const CONTACTS_SQL: &str = include_str!("0001_contacts.sql");

/// Returns the schema version written by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Ensures the contacts schema exists on the provided connection.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::NewerContactSchema {
            file_version: current_version,
            supported_version: latest,
        });
    }

    let tx = conn.transaction()?;
    tx.execute_batch(CONTACTS_SQL)?;
    if current_version < latest {
        tx.execute_batch(&format!("PRAGMA user_version = {latest};"))?;
    }
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
