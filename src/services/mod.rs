//! Application service layer (use cases).
//!
//! Services contain business logic and orchestrate calls to the repositories.
//! They know nothing about HTTP; the delivery layer hands them a
//! [`RequestContext`](crate::domain::RequestContext) for log correlation and
//! receives repository errors back unchanged.

mod contact_service;
mod group_service;

pub use contact_service::{ContactService, ContactServiceImpl};
pub use group_service::{GroupService, GroupServiceImpl};

use uuid::Uuid;

/// Return `id`, or a fresh UUID when it is empty.
pub(crate) fn assign_id(id: &str) -> String {
    if id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        id.to_string()
    }
}
