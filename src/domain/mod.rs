//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for identifiers and the
//! request-scoped context that is threaded explicitly from the HTTP layer
//! into every service call.

pub mod entity_id;
pub mod errors;
pub mod request_context;

pub use entity_id::EntityId;
pub use errors::ValidationError;
pub use request_context::RequestContext;
