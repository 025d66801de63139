//! Contacts API - an HTTP service for managing contacts and contact groups.
//!
//! Requests flow through three layers, each depending only on the one below:
//!
//! - **http**: method dispatch, request/trace identifiers, JSON codec, status mapping
//! - **services**: use cases (full-overwrite updates, group membership)
//! - **repositories**: persistence traits with in-memory and Postgres backends
//!
//! Supporting modules:
//!
//! - **models**: `Contact` and `Group`
//! - **domain**: identifier value objects and the per-request `RequestContext`
//! - **error**: error types shared by the repository and service layers
//! - **config**: configuration from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::{Config, StorageBackend};
pub use domain::{EntityId, RequestContext};
pub use error::{ConfigError, RepositoryError, RepositoryResult};
pub use http::{create_router, AppState, ErrorStatusPolicy};
pub use models::{Contact, Group};
pub use repositories::{
    ContactRepository, GroupRepository, InMemoryContactRepository, InMemoryGroupRepository,
};
pub use services::{ContactService, ContactServiceImpl, GroupService, GroupServiceImpl};
