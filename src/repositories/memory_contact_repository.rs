use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Contact repository backed by a process-local map.
///
/// Used when no relational store is configured, and as the reference
/// implementation in tests. Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn save(&self, contact: &Contact) -> RepositoryResult<()> {
        let mut contacts = self.contacts.write().await;
        contacts.insert(contact.id.clone(), contact.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Contact> {
        let contacts = self.contacts.read().await;
        contacts
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("contact", id))
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let mut contacts = self.contacts.write().await;
        contacts
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("contact", id))
    }
}
