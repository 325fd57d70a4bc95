//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{StoreError, StoreHealth, UrlDeleter, UrlGetter, UrlSaver};
use crate::utils::db_error::is_unique_violation_on_alias;

/// PostgreSQL store for alias mappings.
///
/// Alias uniqueness is enforced by the `url_alias_key` constraint, so a save is
/// a single `INSERT` and concurrent writers cannot both claim an alias.
pub struct PgUrlStore {
    pool: Arc<PgPool>,
}

impl PgUrlStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Loads the full record behind `alias`, including its id and creation
    /// time.
    ///
    /// Returns `Ok(None)` if the alias is not mapped.
    pub async fn find(&self, alias: &str) -> Result<Option<ShortLink>, StoreError> {
        let row = sqlx::query_as::<_, (i64, String, String, DateTime<Utc>)>(
            "SELECT id, alias, url, created_at FROM url WHERE alias = $1",
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(id, alias, url, created_at)| ShortLink::new(id, alias, url, created_at)))
    }
}

#[async_trait]
impl UrlSaver for PgUrlStore {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO url (url, alias)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(url)
        .bind(alias)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_alias(&e) {
                StoreError::AlreadyExists
            } else {
                StoreError::Database(e)
            }
        })
    }
}

#[async_trait]
impl UrlGetter for PgUrlStore {
    async fn get_url(&self, alias: &str) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl UrlDeleter for PgUrlStore {
    async fn delete_url(&self, alias: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl StoreHealth for PgUrlStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
