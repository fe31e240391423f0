//! Headless interactive view over the contact store.
//!
//! # Responsibility
//! - Hold per-session UI state (form, rendered rows, selection, notices).
//! - Translate user intents into `ContactStore` calls.
//!
//! # Invariants
//! - Every successful mutation is followed by a full reload in the same call,
//!   so rendered rows always mirror store state.
//! - Store failures surface as `ViewError`, never as panics.

mod contact_view;
mod form;

pub use contact_view::{
    ContactView, ListFilter, Notice, NoticeKind, Selection, ViewAction, ViewError, ViewResult,
    ViewState,
};
pub use form::{ContactForm, FormField};
