//! Postgres group repository.
//!
//! Expects `groups (id TEXT PRIMARY KEY, name TEXT NOT NULL)` and
//! `group_contacts (position BIGSERIAL PRIMARY KEY, group_id TEXT NOT NULL
//! REFERENCES groups(id) ON DELETE CASCADE, contact_id TEXT NOT NULL)`.
//! Membership order is the order of `position`.

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Group;
use crate::repositories::traits::GroupRepository;
use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::Row;
use std::collections::HashMap;

/// Group repository issuing raw parameterized queries against a pool
/// built by the caller.
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    /// Create a new PgGroupRepository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn save(&self, group: &Group) -> RepositoryResult<()> {
        // Row and membership list go in one transaction.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO groups (id, name) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name",
        )
        .bind(&group.id)
        .bind(&group.name)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM group_contacts WHERE group_id = $1")
            .bind(&group.id)
            .execute(&mut *tx)
            .await?;

        for contact_id in &group.contact_ids {
            sqlx::query("INSERT INTO group_contacts (group_id, contact_id) VALUES ($1, $2)")
                .bind(&group.id)
                .bind(contact_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Group> {
        let row = sqlx::query("SELECT id, name FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found("group", id))?;

        let contact_ids: Vec<String> = sqlx::query_scalar(
            "SELECT contact_id FROM group_contacts WHERE group_id = $1 ORDER BY position",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Group {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            contact_ids,
        })
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Group>> {
        let rows = sqlx::query("SELECT id, name FROM groups")
            .fetch_all(&self.pool)
            .await?;

        let members = sqlx::query(
            "SELECT group_id, contact_id FROM group_contacts ORDER BY position",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_group: HashMap<String, Vec<String>> = HashMap::new();
        for member in &members {
            let group_id: String = member.try_get("group_id")?;
            let contact_id: String = member.try_get("contact_id")?;
            by_group.entry(group_id).or_default().push(contact_id);
        }

        rows.iter()
            .map(|row| -> RepositoryResult<Group> {
                let id: String = row.try_get("id")?;
                let contact_ids = by_group.remove(&id).unwrap_or_default();
                Ok(Group {
                    name: row.try_get("name")?,
                    id,
                    contact_ids,
                })
            })
            .collect()
    }

    async fn add_contact_to_group(
        &self,
        contact_id: &str,
        group_id: &str,
    ) -> RepositoryResult<()> {
        let result = sqlx::query(
            "INSERT INTO group_contacts (group_id, contact_id) \
             SELECT id, $2 FROM groups WHERE id = $1",
        )
        .bind(group_id)
        .bind(contact_id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("group", group_id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("group", id));
        }
        Ok(())
    }
}
