use async_trait::async_trait;
use contacts_api::error::{RepositoryError, RepositoryResult};
use contacts_api::models::Contact;
use contacts_api::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data, tracks method calls for verification
/// and can be switched into a failing mode.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failure: Arc<Mutex<Option<RepositoryError>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact to the mock repository without counting a call.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id.clone(), contact);
    }

    /// Read a stored contact without counting a call.
    pub fn stored(&self, id: &str) -> Option<Contact> {
        self.contacts.lock().unwrap().get(id).cloned()
    }

    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: RepositoryError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total number of repository calls of any kind.
    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    fn track_call(&self, method: &str) -> RepositoryResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn save(&self, contact: &Contact) -> RepositoryResult<()> {
        self.track_call("save")?;

        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id.clone(), contact.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Contact> {
        self.track_call("get_by_id")?;

        let contacts = self.contacts.lock().unwrap();
        contacts
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("contact {}", id)))
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.track_call("delete")?;

        let mut contacts = self.contacts.lock().unwrap();
        contacts
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("contact {}", id)))
    }
}
