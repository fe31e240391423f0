//! Editable contact form.

use crate::model::contact::{Contact, ContactDraft};

/// One labeled text input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    PhoneNumber,
    Email,
}

impl FormField {
    /// Fields in display order.
    pub const ALL: [FormField; 3] = [Self::Name, Self::PhoneNumber, Self::Email];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::PhoneNumber => "Phone Number",
            Self::Email => "Email",
        }
    }
}

/// User-authored field values; may diverge from the selected row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl ContactForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::PhoneNumber => &self.phone_number,
            FormField::Email => &self.email,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::PhoneNumber => &mut self.phone_number,
            FormField::Email => &mut self.email,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone_number.clear();
        self.email.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone_number.is_empty() && self.email.is_empty()
    }

    /// Replaces all fields with the values of a rendered row.
    pub fn fill_from(&mut self, contact: &Contact) {
        self.name.clone_from(&contact.name);
        self.phone_number.clone_from(&contact.phone_number);
        self.email.clone_from(&contact.email);
    }

    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft::new(
            self.name.as_str(),
            self.phone_number.as_str(),
            self.email.as_str(),
        )
    }
}
