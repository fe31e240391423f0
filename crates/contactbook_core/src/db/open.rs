//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure the busy timeout used for a locked database file.
//! - Run schema bootstrap before returning a usable connection.
//!
//! # Invariants
//! - Returned connections always see an existing `contacts` table.

use super::schema::ensure_schema;
use super::{DbError, DbResult};
use log::{debug, error};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (creating if absent) a SQLite database file and ensures the schema.
///
/// # Side effects
/// - Creates the backing file when it does not exist yet.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    let conn = Connection::open(path).map_err(|err| {
        error!(
            "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        err
    })?;
    bootstrap("file", conn, started_at)
}

/// Opens an in-memory SQLite database and ensures the schema.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    let conn = Connection::open_in_memory().map_err(|err| {
        error!(
            "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        err
    })?;
    bootstrap("memory", conn, started_at)
}

fn bootstrap(mode: &str, mut conn: Connection, started_at: Instant) -> DbResult<Connection> {
    let result = conn
        .busy_timeout(BUSY_TIMEOUT)
        .map_err(DbError::from)
        .and_then(|()| ensure_schema(&mut conn));

    match result {
        Ok(()) => {
            // Per-operation connections make this hot; keep it below info.
            debug!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}
