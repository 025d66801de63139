use async_trait::async_trait;
use contacts_api::error::{RepositoryError, RepositoryResult};
use contacts_api::models::Group;
use contacts_api::repositories::GroupRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// Mock group repository for testing.
///
/// Besides call counting, it can hold every `get_by_id` at a barrier after
/// the snapshot is taken, which lines up concurrent read-modify-write cycles
/// deterministically.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockGroupRepository {
    groups: Arc<Mutex<HashMap<String, Group>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    read_barrier: Arc<Mutex<Option<Arc<Barrier>>>>,
}

#[allow(dead_code)]
impl MockGroupRepository {
    /// Create a new empty MockGroupRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group to the mock repository without counting a call.
    pub fn add_group(&self, group: Group) {
        let mut groups = self.groups.lock().unwrap();
        groups.insert(group.id.clone(), group);
    }

    /// Read a stored group without counting a call.
    pub fn stored(&self, id: &str) -> Option<Group> {
        self.groups.lock().unwrap().get(id).cloned()
    }

    /// Hold each `get_by_id` until `parties` readers have taken their snapshot.
    pub fn synchronize_reads(&self, parties: usize) {
        *self.read_barrier.lock().unwrap() = Some(Arc::new(Barrier::new(parties)));
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl GroupRepository for MockGroupRepository {
    async fn save(&self, group: &Group) -> RepositoryResult<()> {
        self.track_call("save");

        let mut groups = self.groups.lock().unwrap();
        groups.insert(group.id.clone(), group.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Group> {
        self.track_call("get_by_id");

        let snapshot = {
            let groups = self.groups.lock().unwrap();
            groups
                .get(id)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(format!("group {}", id)))
        };

        let barrier = self.read_barrier.lock().unwrap().clone();
        if let Some(barrier) = barrier {
            barrier.wait().await;
        }

        snapshot
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Group>> {
        self.track_call("get_all");

        let groups = self.groups.lock().unwrap();
        Ok(groups.values().cloned().collect())
    }

    async fn add_contact_to_group(
        &self,
        contact_id: &str,
        group_id: &str,
    ) -> RepositoryResult<()> {
        self.track_call("add_contact_to_group");

        let mut groups = self.groups.lock().unwrap();
        let group = groups
            .get_mut(group_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("group {}", group_id)))?;
        group.add_member(contact_id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.track_call("delete");

        let mut groups = self.groups.lock().unwrap();
        groups
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("group {}", id)))
    }
}
