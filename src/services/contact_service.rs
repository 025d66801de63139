//! Contact service layer.
//!
//! Business logic for creating, reading, updating and deleting contacts.

use crate::domain::RequestContext;
use crate::error::RepositoryResult;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Persist a new contact, assigning an ID if it has none.
    async fn create_contact(&self, ctx: &RequestContext, contact: Contact)
        -> RepositoryResult<Contact>;

    /// Overwrite name, email and phone of an existing contact.
    ///
    /// The incoming values always win, empty ones included.
    async fn update_contact(&self, ctx: &RequestContext, contact: Contact)
        -> RepositoryResult<Contact>;

    /// Delete a contact by ID.
    async fn delete_contact(&self, ctx: &RequestContext, id: &str) -> RepositoryResult<()>;

    /// Get a contact by ID.
    async fn get_contact_by_id(&self, ctx: &RequestContext, id: &str)
        -> RepositoryResult<Contact>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contacts: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create_contact(
        &self,
        ctx: &RequestContext,
        mut contact: Contact,
    ) -> RepositoryResult<Contact> {
        contact.id = super::assign_id(&contact.id);
        debug!(
            trace_id = %ctx.trace_id(),
            request_id = %ctx.request_id(),
            contact_id = %contact.id,
            "Creating contact"
        );

        self.contacts.save(&contact).await?;
        Ok(contact)
    }

    async fn update_contact(
        &self,
        ctx: &RequestContext,
        contact: Contact,
    ) -> RepositoryResult<Contact> {
        debug!(
            trace_id = %ctx.trace_id(),
            request_id = %ctx.request_id(),
            contact_id = %contact.id,
            "Updating contact"
        );

        let mut existing = self.contacts.get_by_id(&contact.id).await?;
        existing.overwrite_details(contact);

        self.contacts.save(&existing).await?;
        Ok(existing)
    }

    async fn delete_contact(&self, ctx: &RequestContext, id: &str) -> RepositoryResult<()> {
        debug!(
            trace_id = %ctx.trace_id(),
            request_id = %ctx.request_id(),
            contact_id = %id,
            "Deleting contact"
        );
        self.contacts.delete(id).await
    }

    async fn get_contact_by_id(
        &self,
        ctx: &RequestContext,
        id: &str,
    ) -> RepositoryResult<Contact> {
        debug!(
            trace_id = %ctx.trace_id(),
            request_id = %ctx.request_id(),
            contact_id = %id,
            "Fetching contact"
        );
        self.contacts.get_by_id(id).await
    }
}
