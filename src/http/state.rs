//! Application state for the HTTP server.

use super::error::ErrorStatusPolicy;
use crate::repositories::{ContactRepository, GroupRepository};
use crate::services::{ContactService, ContactServiceImpl, GroupService, GroupServiceImpl};
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Contact use cases
    pub contacts: Arc<dyn ContactService>,
    /// Group use cases
    pub groups: Arc<dyn GroupService>,
    /// Status mapping for use-case errors
    pub error_status: ErrorStatusPolicy,
}

impl AppState {
    /// Create a new application state from already-built services.
    pub fn new(contacts: Arc<dyn ContactService>, groups: Arc<dyn GroupService>) -> Self {
        Self {
            contacts,
            groups,
            error_status: ErrorStatusPolicy::default(),
        }
    }

    /// Wire the default services over the given repositories.
    pub fn from_repositories(
        contact_repo: Arc<dyn ContactRepository>,
        group_repo: Arc<dyn GroupRepository>,
    ) -> Self {
        let contacts = Arc::new(ContactServiceImpl::new(contact_repo.clone()));
        let groups = Arc::new(GroupServiceImpl::new(contact_repo, group_repo));
        Self::new(contacts, groups)
    }

    pub fn with_error_status(mut self, policy: ErrorStatusPolicy) -> Self {
        self.error_status = policy;
        self
    }
}
