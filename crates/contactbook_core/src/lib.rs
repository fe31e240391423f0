//! Core logic for the contact book.
//! This crate is the single source of truth for contact invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactDraft, ContactId, ContactValidationError};
pub use repo::contact_repo::{ContactRepository, RepoError, RepoResult, SqliteContactRepository};
pub use service::contact_store::{ContactStore, SqliteContactStore};
pub use view::{
    ContactForm, ContactView, FormField, ListFilter, Notice, NoticeKind, Selection, ViewAction,
    ViewError, ViewResult, ViewState,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
