//! Contact form state management

use super::field::FormField;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Rejection of a field key outside name/email/message
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown contact field: {0}")]
    UnknownField(String),
}

/// Snapshot of the form taken at submit time, logged and then dropped
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The contact form: three text fields plus the Send row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", false),
            email: FormField::text("email", "Email", false),
            message: FormField::text("message", "Message", true),
            active_field_index: 0,
        }
    }

    /// Returns true if the Send row is currently active
    pub fn is_send_row_active(&self) -> bool {
        self.active_field_index == 3
    }

    /// Replace exactly one field's value, addressed by key.
    /// Other fields are untouched; unknown keys are rejected.
    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        for field in [&mut self.name, &mut self.email, &mut self.message] {
            if field.name == name {
                field.set_text(value);
                return Ok(());
            }
        }
        Err(FormError::UnknownField(name.to_string()))
    }

    /// The required gate: all three fields must be non-empty to send
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// Reset all fields to empty and focus back to the first field
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.active_field_index = 0;
    }

    /// Snapshot the current values and reset the form
    pub fn take_submission(&mut self) -> ContactSubmission {
        let submission = ContactSubmission {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            message: self.message.as_text().to_string(),
            submitted_at: Utc::now(),
        };
        self.reset();
        submission
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4 // name, email, message, Send row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.email,
            // Send row (index 3) returns message as dummy (not used for input)
            _ => &mut self.message,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.message),
            // Index 3 is the Send row, no FormField for it
            _ => None,
        }
    }
}
