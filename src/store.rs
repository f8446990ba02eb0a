//! Storage collaborator for the `providers` table.
//! Each operation maps to exactly one parameterized statement.

mod memory;

pub use memory::MemoryProviderStore;

use crate::error::StoreError;
use crate::model::{NewProvider, Provider, Service};
use async_trait::async_trait;
use sqlx::PgPool;

pub const PROVIDERS_TABLE: &str = "providers";

/// Operations the HTTP layer needs from storage. Injected through `AppState`.
#[async_trait]
pub trait ProviderStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Provider>, StoreError>;

    /// Insert and return the row with its storage-assigned id.
    async fn insert(&self, provider: &NewProvider) -> Result<Provider, StoreError>;

    /// Returns the number of rows changed (0 when `id` does not exist).
    async fn update(&self, id: i64, provider: &NewProvider) -> Result<u64, StoreError>;

    /// Returns the number of rows removed (0 when `id` does not exist).
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgProviderStore {
    pool: PgPool,
}

impl PgProviderStore {
    pub fn new(pool: PgPool) -> Self {
        PgProviderStore { pool }
    }
}

fn row_to_provider((id, name, service): (i64, String, String)) -> Result<Provider, StoreError> {
    let service = service
        .parse::<Service>()
        .map_err(|_| StoreError::UnknownService { id, value: service })?;
    Ok(Provider { id, name, service })
}

#[async_trait]
impl ProviderStore for PgProviderStore {
    async fn list(&self) -> Result<Vec<Provider>, StoreError> {
        let sql = format!("SELECT id, name, service FROM {} ORDER BY id", PROVIDERS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<(i64, String, String)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        rows.into_iter().map(row_to_provider).collect()
    }

    async fn insert(&self, provider: &NewProvider) -> Result<Provider, StoreError> {
        let sql = format!(
            "INSERT INTO {} (name, service) VALUES ($1, $2) RETURNING id",
            PROVIDERS_TABLE
        );
        tracing::debug!(sql = %sql, service = %provider.service, "query");
        let (id,): (i64,) = sqlx::query_as(&sql)
            .bind(&provider.name)
            .bind(provider.service.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(provider.clone().with_id(id))
    }

    async fn update(&self, id: i64, provider: &NewProvider) -> Result<u64, StoreError> {
        let sql = format!(
            "UPDATE {} SET name = $1, service = $2 WHERE id = $3",
            PROVIDERS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql)
            .bind(&provider.name)
            .bind(provider.service.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", PROVIDERS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_with_known_service_maps() {
        let p = row_to_provider((3, "Alice".into(), "Teacher".into())).unwrap();
        assert_eq!(p.service, Service::Teacher);
    }

    #[test]
    fn row_with_unknown_service_is_an_error() {
        let err = row_to_provider((3, "Alice".into(), "Pilot".into())).unwrap_err();
        assert!(matches!(err, StoreError::UnknownService { id: 3, .. }));
    }
}
