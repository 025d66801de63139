//! Group service layer.
//!
//! Business logic for groups and for associating contacts with them.

use crate::domain::RequestContext;
use crate::error::RepositoryResult;
use crate::models::Group;
use crate::repositories::{ContactRepository, GroupRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Group service trait for business operations.
#[async_trait]
pub trait GroupService: Send + Sync {
    /// Persist a new group, assigning an ID if it has none.
    async fn create_group(&self, ctx: &RequestContext, group: Group) -> RepositoryResult<Group>;

    /// Get a group by ID.
    async fn get_group_by_id(&self, ctx: &RequestContext, id: &str) -> RepositoryResult<Group>;

    /// Get every group.
    async fn get_all_groups(&self, ctx: &RequestContext) -> RepositoryResult<Vec<Group>>;

    /// Append an existing contact to an existing group and return the saved group.
    ///
    /// This is a read-modify-write with no isolation: two concurrent calls on
    /// the same group can both read the old membership, and the later save
    /// drops the earlier reference.
    async fn add_contact_to_group(
        &self,
        ctx: &RequestContext,
        contact_id: &str,
        group_id: &str,
    ) -> RepositoryResult<Group>;

    /// Delete a group by ID. Member contacts are untouched.
    async fn delete_group(&self, ctx: &RequestContext, id: &str) -> RepositoryResult<()>;
}

/// Default implementation of GroupService.
pub struct GroupServiceImpl {
    contacts: Arc<dyn ContactRepository>,
    groups: Arc<dyn GroupRepository>,
}

impl GroupServiceImpl {
    /// Create a new group service.
    pub fn new(contacts: Arc<dyn ContactRepository>, groups: Arc<dyn GroupRepository>) -> Self {
        Self { contacts, groups }
    }
}

#[async_trait]
impl GroupService for GroupServiceImpl {
    async fn create_group(
        &self,
        ctx: &RequestContext,
        mut group: Group,
    ) -> RepositoryResult<Group> {
        group.id = super::assign_id(&group.id);
        debug!(
            trace_id = %ctx.trace_id(),
            request_id = %ctx.request_id(),
            group_id = %group.id,
            "Creating group"
        );

        self.groups.save(&group).await?;
        Ok(group)
    }

    async fn get_group_by_id(&self, ctx: &RequestContext, id: &str) -> RepositoryResult<Group> {
        debug!(
            trace_id = %ctx.trace_id(),
            request_id = %ctx.request_id(),
            group_id = %id,
            "Fetching group"
        );
        self.groups.get_by_id(id).await
    }

    async fn get_all_groups(&self, ctx: &RequestContext) -> RepositoryResult<Vec<Group>> {
        debug!(
            trace_id = %ctx.trace_id(),
            request_id = %ctx.request_id(),
            "Listing groups"
        );
        self.groups.get_all().await
    }

    async fn add_contact_to_group(
        &self,
        ctx: &RequestContext,
        contact_id: &str,
        group_id: &str,
    ) -> RepositoryResult<Group> {
        debug!(
            trace_id = %ctx.trace_id(),
            request_id = %ctx.request_id(),
            contact_id = %contact_id,
            group_id = %group_id,
            "Adding contact to group"
        );

        let contact = self.contacts.get_by_id(contact_id).await?;
        let mut group = self.groups.get_by_id(group_id).await?;

        group.add_member(contact.id);

        self.groups.save(&group).await?;
        Ok(group)
    }

    async fn delete_group(&self, ctx: &RequestContext, id: &str) -> RepositoryResult<()> {
        debug!(
            trace_id = %ctx.trace_id(),
            request_id = %ctx.request_id(),
            group_id = %id,
            "Deleting group"
        );
        self.groups.delete(id).await
    }
}
