//! Contact-form enquiry posted to `POST /enquiry`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A visitor enquiry. Every field is required; nothing identifies it after
/// it has been sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryRecord {
    /// Visitor name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Reply phone.
    pub phone: String,
    /// Subject line.
    pub subject: String,
    /// Free-text message.
    pub message: String,
}

/// Form fields, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryField {
    /// Visitor name
    Name,
    /// Reply address
    Email,
    /// Reply phone
    Phone,
    /// Subject line
    Subject,
    /// Message body
    Message,
}

impl EnquiryField {
    /// Fields in on-screen order.
    pub const ALL: [EnquiryField; 5] = [
        EnquiryField::Name,
        EnquiryField::Email,
        EnquiryField::Phone,
        EnquiryField::Subject,
        EnquiryField::Message,
    ];

    /// Wire and form name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryField::Name => "name",
            EnquiryField::Email => "email",
            EnquiryField::Phone => "phone",
            EnquiryField::Subject => "subject",
            EnquiryField::Message => "message",
        }
    }
}

impl fmt::Display for EnquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EnquiryRecord {
    /// Current value of a field.
    pub fn get(&self, field: EnquiryField) -> &str {
        match field {
            EnquiryField::Name => &self.name,
            EnquiryField::Email => &self.email,
            EnquiryField::Phone => &self.phone,
            EnquiryField::Subject => &self.subject,
            EnquiryField::Message => &self.message,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: EnquiryField, value: impl Into<String>) {
        let slot = match field {
            EnquiryField::Name => &mut self.name,
            EnquiryField::Email => &mut self.email,
            EnquiryField::Phone => &mut self.phone,
            EnquiryField::Subject => &mut self.subject,
            EnquiryField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Fields that are empty or whitespace-only, in on-screen order.
    pub fn missing_fields(&self) -> Vec<EnquiryField> {
        EnquiryField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Reject the record if any field is blank. Reports the first one.
    pub fn validate(&self) -> Result<()> {
        match self.missing_fields().first() {
            Some(field) => Err(Error::validation_field(
                field.as_str(),
                format!("{field} is required"),
            )),
            None => Ok(()),
        }
    }

    /// Whether every field is blank (a freshly cleared form).
    pub fn is_blank(&self) -> bool {
        self.missing_fields().len() == EnquiryField::ALL.len()
    }
}
