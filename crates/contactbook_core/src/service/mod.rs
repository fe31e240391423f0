//! Core use-case services.
//!
//! # Responsibility
//! - Expose the contact store capability consumed by the view layer.
//! - Keep view code decoupled from connection and SQL details.

pub mod contact_store;
