//! In-process `ProviderStore`. Ids increase monotonically and are never reused.

use super::ProviderStore;
use crate::error::StoreError;
use crate::model::{NewProvider, Provider};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Provider>,
}

#[derive(Default)]
pub struct MemoryProviderStore {
    inner: RwLock<Inner>,
}

impl MemoryProviderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("state lock".into())
}

#[async_trait]
impl ProviderStore for MemoryProviderStore {
    async fn list(&self) -> Result<Vec<Provider>, StoreError> {
        let guard = self.inner.read().map_err(poisoned)?;
        Ok(guard.rows.values().cloned().collect())
    }

    async fn insert(&self, provider: &NewProvider) -> Result<Provider, StoreError> {
        let mut guard = self.inner.write().map_err(poisoned)?;
        guard.last_id += 1;
        let row = provider.clone().with_id(guard.last_id);
        guard.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, provider: &NewProvider) -> Result<u64, StoreError> {
        let mut guard = self.inner.write().map_err(poisoned)?;
        match guard.rows.get_mut(&id) {
            Some(row) => {
                row.name = provider.name.clone();
                row.service = provider.service;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let mut guard = self.inner.write().map_err(poisoned)?;
        Ok(u64::from(guard.rows.remove(&id).is_some()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Service;

    fn alice() -> NewProvider {
        NewProvider {
            name: "Alice".into(),
            service: Service::Doctor,
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryProviderStore::new();
        let first = store.insert(&alice()).await.unwrap();
        assert_eq!(store.delete(first.id).await.unwrap(), 1);
        let second = store.insert(&alice()).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn update_and_delete_report_affected_rows() {
        let store = MemoryProviderStore::new();
        let row = store.insert(&alice()).await.unwrap();
        let changed = NewProvider {
            name: "Alicia".into(),
            service: Service::Nurse,
        };
        assert_eq!(store.update(row.id, &changed).await.unwrap(), 1);
        assert_eq!(store.update(row.id + 100, &changed).await.unwrap(), 0);
        assert_eq!(store.list().await.unwrap(), vec![changed.with_id(row.id)]);
        assert_eq!(store.delete(row.id).await.unwrap(), 1);
        assert_eq!(store.delete(row.id).await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }
}
