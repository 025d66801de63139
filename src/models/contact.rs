//! Contact model representing a person in the address book.

use serde::{Deserialize, Serialize};

/// A contact stored by the service.
///
/// Every field falls back to its empty value when missing from a JSON
/// payload, so an update that omits a field clears it rather than keeping
/// the stored value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    /// Unique identifier, assigned at creation when left empty
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address (not validated, may be empty)
    pub email: String,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Contact {
    /// Create a new contact with minimal required fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Overwrite the mutable fields with those of `incoming`.
    ///
    /// The identifier is kept; name, email and phone are replaced wholesale,
    /// including with empty values.
    pub fn overwrite_details(&mut self, incoming: Contact) {
        self.name = incoming.name;
        self.email = incoming.email;
        self.phone = incoming.phone;
    }
}
