use crate::error::RepositoryResult;
use crate::models::{Contact, Group};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Each method is a single persistence action. Callers must not assume
/// atomicity across several calls.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert or overwrite a contact keyed by its ID.
    async fn save(&self, contact: &Contact) -> RepositoryResult<()>;

    /// Retrieve a single contact by ID.
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Contact>;

    /// Delete a contact. Fails with `NotFound` when nothing was removed.
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}

/// Repository for managing groups and their membership.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Insert or overwrite a group, membership list included.
    async fn save(&self, group: &Group) -> RepositoryResult<()>;

    /// Retrieve a single group by ID.
    async fn get_by_id(&self, id: &str) -> RepositoryResult<Group>;

    /// Retrieve every group, freshly read from the store.
    async fn get_all(&self) -> RepositoryResult<Vec<Group>>;

    /// Append one contact reference to a group in a single store operation.
    ///
    /// Does not check that the contact exists.
    async fn add_contact_to_group(&self, contact_id: &str, group_id: &str)
        -> RepositoryResult<()>;

    /// Delete a group. Fails with `NotFound` when nothing was removed.
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}
