//! SQLite storage bootstrap and schema initialization entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the contact book.
//! - Ensure the `contacts` table exists before any read or write.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write contacts before schema bootstrap succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

/// Fixed database file name, resolved relative to the working directory.
pub const DB_FILE_NAME: &str = "phonebook.sqlite3";

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or bootstrapping the contact book file.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// File was written by a build with a newer contacts schema.
    NewerContactSchema {
        file_version: u32,
        supported_version: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "contact book storage failed: {err}"),
            Self::NewerContactSchema {
                file_version,
                supported_version,
            } => write!(
                f,
                "contact book file uses contacts schema v{file_version}; this build reads up to v{supported_version}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::NewerContactSchema { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
