//! Request shapes that are not plain entities.

use crate::domain::EntityId;
use serde::Deserialize;

/// `?id=` query parameter accepted by GET and DELETE.
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    #[serde(default)]
    pub id: Option<String>,
}

/// `{"id": "..."}` body accepted by GET and DELETE when no query is given.
/// A body without the key carries no identifier.
#[derive(Debug, Deserialize)]
pub struct IdBody {
    #[serde(default)]
    pub id: Option<EntityId>,
}

/// Body of `PUT /groups`.
#[derive(Debug, Deserialize)]
pub struct MembershipRequest {
    pub group_id: EntityId,
    pub contact_id: EntityId,
}
