//! In-memory repository doubles shared by the integration tests.

mod mock_contact_repository;
mod mock_group_repository;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_group_repository::MockGroupRepository;
