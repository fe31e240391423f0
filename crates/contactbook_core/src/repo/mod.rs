//! Repository layer contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the data access contract for contacts.
//! - Isolate SQL details from store/view orchestration.
//!
//! # Invariants
//! - Write paths run `ContactDraft::validate()` before any SQL mutation.
//! - Update returns a semantic `NotFound` instead of silently matching zero
//!   rows.

pub mod contact_repo;
