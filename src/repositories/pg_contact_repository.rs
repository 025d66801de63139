//! Postgres contact repository.
//!
//! Expects a `contacts (id TEXT PRIMARY KEY, name TEXT NOT NULL,
//! email TEXT NOT NULL, phone TEXT NULL)` table; schema management happens
//! outside this crate.

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

/// Contact repository issuing raw parameterized queries against a pool
/// built by the caller.
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn contact_from_row(row: &PgRow) -> RepositoryResult<Contact> {
        Ok(Contact {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
        })
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn save(&self, contact: &Contact) -> RepositoryResult<()> {
        sqlx::query(
            "INSERT INTO contacts (id, name, email, phone) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE \
             SET name = EXCLUDED.name, email = EXCLUDED.email, phone = EXCLUDED.phone",
        )
        .bind(&contact.id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<Contact> {
        let row = sqlx::query("SELECT id, name, email, phone FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found("contact", id))?;
        Self::contact_from_row(&row)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("contact", id));
        }
        Ok(())
    }
}
