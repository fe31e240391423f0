//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide single-row CRUD and name search over the `contacts` table.
//! - Keep SQL text and row decoding inside the persistence boundary.
//!
//! # Invariants
//! - Every statement binds user text as parameters, never by interpolation.
//! - `list_contacts` orders by `name ASC, id ASC`.
//! - `search_contacts` orders by `id ASC` (insertion order).

use crate::db::schema::latest_version;
use crate::db::DbError;
use crate::model::contact::{Contact, ContactDraft, ContactId, ContactValidationError};
use rusqlite::{params, Connection, Row, ToSql};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    name,
    phone_number,
    email
FROM contacts";

const REQUIRED_COLUMNS: &[&str] = &["id", "name", "phone_number", "email"];
const LIKE_ESCAPE: char = '\\';

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ContactValidationError),
    Db(DbError),
    NotFound(ContactId),
    /// Connection was handed over before schema bootstrap ran.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is below required {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for contact CRUD and search.
pub trait ContactRepository {
    fn create_contact(&self, draft: &ContactDraft) -> RepoResult<ContactId>;
    fn update_contact(&self, id: ContactId, draft: &ContactDraft) -> RepoResult<()>;
    /// Returns `false` when no row matched `id`.
    fn delete_contact(&self, id: ContactId) -> RepoResult<bool>;
    fn get_contact(&self, id: ContactId) -> RepoResult<Option<Contact>>;
    fn list_contacts(&self) -> RepoResult<Vec<Contact>>;
    fn search_contacts(&self, name_fragment: &str) -> RepoResult<Vec<Contact>>;
}

/// SQLite-backed contact repository borrowing a ready connection.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Wraps a connection after checking that schema bootstrap has run.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn query_contacts(&self, sql: &str, bind: &[&dyn ToSql]) -> RepoResult<Vec<Contact>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(bind)?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }
        Ok(contacts)
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn create_contact(&self, draft: &ContactDraft) -> RepoResult<ContactId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO contacts (name, phone_number, email) VALUES (?1, ?2, ?3);",
            params![
                draft.name.as_str(),
                draft.phone_number.as_str(),
                draft.email.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_contact(&self, id: ContactId, draft: &ContactDraft) -> RepoResult<()> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE contacts
             SET
                name = ?1,
                phone_number = ?2,
                email = ?3
             WHERE id = ?4;",
            params![
                draft.name.as_str(),
                draft.phone_number.as_str(),
                draft.email.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_contact(&self, id: ContactId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn get_contact(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        let mut contacts =
            self.query_contacts(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"), &[&id])?;
        Ok(contacts.pop())
    }

    fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        self.query_contacts(&format!("{CONTACT_SELECT_SQL} ORDER BY name ASC, id ASC;"), &[])
    }

    fn search_contacts(&self, name_fragment: &str) -> RepoResult<Vec<Contact>> {
        let pattern = format!("%{}%", escape_like(name_fragment));
        self.query_contacts(
            &format!(
                "{CONTACT_SELECT_SQL} WHERE name LIKE ?1 ESCAPE '{LIKE_ESCAPE}' ORDER BY id ASC;"
            ),
            &[&pattern],
        )
    }
}

/// Escapes `LIKE` wildcards so the fragment matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    let id: ContactId = row.get("id")?;
    // Text columns carry no NOT NULL constraint; NULL reads as empty.
    let name = row.get::<_, Option<String>>("name")?.unwrap_or_default();
    let phone_number = row
        .get::<_, Option<String>>("phone_number")?
        .unwrap_or_default();
    let email = row.get::<_, Option<String>>("email")?.unwrap_or_default();

    Ok(Contact {
        id,
        name,
        phone_number,
        email,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'contacts'
        );",
        [],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(RepoError::MissingRequiredTable("contacts"));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('contacts');")?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    for &column in REQUIRED_COLUMNS {
        if !columns.iter().any(|existing| existing == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: "contacts",
                column,
            });
        }
    }

    Ok(())
}
