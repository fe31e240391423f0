//! Contact domain model.
//!
//! # Responsibility
//! - Define the persisted contact record and its write payload.
//! - Own the presence checks applied before any write.
//!
//! # Invariants
//! - Every contact is identified by a store-assigned `ContactId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod contact;
