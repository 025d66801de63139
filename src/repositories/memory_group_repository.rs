use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Group;
use crate::repositories::traits::GroupRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct GroupTable {
    rows: HashMap<String, Group>,
    // Creation order, for a stable `get_all`
    order: Vec<String>,
}

/// Group repository backed by a process-local map.
///
/// `save` replaces the whole row, membership included, so two interleaved
/// read-modify-write cycles behave like last-writer-wins on a real table.
/// `add_contact_to_group` appends under the write lock and never loses a
/// reference.
#[derive(Default)]
pub struct InMemoryGroupRepository {
    table: RwLock<GroupTable>,
}

impl InMemoryGroupRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn save(&self, group: &Group) -> RepositoryResult<()> {
        let mut table = self.table.write().await;
        if table.rows.insert(group.id.clone(), group.clone()).is_none() {
            table.order.push(group.id.clone());
        }
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Group> {
        let table = self.table.read().await;
        table
            .rows
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("group", id))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Group>> {
        let table = self.table.read().await;
        Ok(table
            .order
            .iter()
            .filter_map(|id| table.rows.get(id).cloned())
            .collect())
    }

    async fn add_contact_to_group(
        &self,
        contact_id: &str,
        group_id: &str,
    ) -> RepositoryResult<()> {
        let mut table = self.table.write().await;
        let group = table
            .rows
            .get_mut(group_id)
            .ok_or_else(|| RepositoryError::not_found("group", group_id))?;
        group.add_member(contact_id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let mut table = self.table.write().await;
        if table.rows.remove(id).is_none() {
            return Err(RepositoryError::not_found("group", id));
        }
        table.order.retain(|existing| existing != id);
        Ok(())
    }
}
