//! Contact record and write payload.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another contact.
//! - `name` and `phone_number` are never persisted empty.
//! - `email` is free-form and may be empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned surrogate key (`contacts.id`).
pub type ContactId = i64;

/// Persisted contact row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone_number: String,
    /// Empty string when the user left the field blank.
    pub email: String,
}

/// Field values for create and full-overwrite update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    /// Validates required fields.
    ///
    /// Whitespace-only values count as missing. Values are stored as typed;
    /// no trimming happens here.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        if self.phone_number.trim().is_empty() {
            return Err(ContactValidationError::EmptyPhoneNumber);
        }
        Ok(())
    }
}

/// Presence-check failure for a contact write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    EmptyPhoneNumber,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name is required"),
            Self::EmptyPhoneNumber => write!(f, "phone number is required"),
        }
    }
}

impl Error for ContactValidationError {}
