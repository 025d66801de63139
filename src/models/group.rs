//! Group model: a named, ordered collection of contact references.

use serde::{Deserialize, Serialize};

/// A group of contacts.
///
/// Membership is held by identifier only; deleting a contact does not touch
/// the groups that reference it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Group {
    /// Unique identifier, assigned at creation when left empty
    pub id: String,

    /// Display name
    pub name: String,

    /// Member contact identifiers in insertion order (duplicates allowed)
    pub contact_ids: Vec<String>,
}

impl Group {
    /// Create an empty group.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact_ids: Vec::new(),
        }
    }

    /// Append a contact reference to the membership list.
    pub fn add_member(&mut self, contact_id: impl Into<String>) {
        self.contact_ids.push(contact_id.into());
    }

    /// Number of times `contact_id` appears in the membership list.
    pub fn member_count(&self, contact_id: &str) -> usize {
        self.contact_ids.iter().filter(|id| *id == contact_id).count()
    }
}
