use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc, time::Instant};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::modules::category::domain::{Category, CategoryRepository};
use crate::shared::{
    application::UnitOfWork,
    domain::AggregateRoot,
    errors::{AppError, AppResult},
    utils::LogContext,
};

const TABLE: &str = "categories";

#[derive(Debug, Default)]
struct Store {
    staged: HashMap<Uuid, Category>,
    committed: HashMap<Uuid, Category>,
}

/// Process-local category storage shared by the in-memory adapters.
///
/// Inserts are staged until the matching [`InMemoryUnitOfWork`] commits.
/// Meant for wiring and tests, not for durable storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryStore {
    inner: Arc<RwLock<Store>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            store: self.clone(),
        }
    }

    pub fn unit_of_work(&self) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork {
            store: self.clone(),
        }
    }

    /// Committed category by id
    pub async fn find_committed(&self, id: Uuid) -> Option<Category> {
        self.inner.read().await.committed.get(&id).cloned()
    }

    pub async fn committed_count(&self) -> usize {
        self.inner.read().await.committed.len()
    }

    pub async fn staged_count(&self) -> usize {
        self.inner.read().await.staged.len()
    }
}

fn ensure_not_cancelled(cancellation: &CancellationToken, operation: &str) -> AppResult<()> {
    if cancellation.is_cancelled() {
        return Err(AppError::Cancelled(format!("{} on {}", operation, TABLE)));
    }
    Ok(())
}

pub struct InMemoryCategoryRepository {
    store: InMemoryCategoryStore,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: &Category, cancellation: &CancellationToken) -> AppResult<()> {
        ensure_not_cancelled(cancellation, "insert")?;
        LogContext::db_operation("insert", TABLE, None);
        let start = Instant::now();

        let mut store = self.store.inner.write().await;
        let id = category.id();
        if store.staged.contains_key(&id) || store.committed.contains_key(&id) {
            return Err(AppError::DatabaseError(format!(
                "Category {} already exists",
                id
            )));
        }
        store.staged.insert(id, category.clone());

        LogContext::db_operation("insert", TABLE, Some(start.elapsed().as_millis() as u64));
        Ok(())
    }
}

pub struct InMemoryUnitOfWork {
    store: InMemoryCategoryStore,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(&self, cancellation: &CancellationToken) -> AppResult<()> {
        // A cancelled commit leaves staged entries in place
        ensure_not_cancelled(cancellation, "commit")?;
        let start = Instant::now();

        let mut store = self.store.inner.write().await;
        let staged = std::mem::take(&mut store.staged);
        let count = staged.len();
        store.committed.extend(staged);

        log::debug!("Committed {} staged categories", count);
        LogContext::db_operation("commit", TABLE, Some(start.elapsed().as_millis() as u64));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_is_staged_until_commit() {
        let store = InMemoryCategoryStore::new();
        let category = Category::new("Action").unwrap();
        let token = CancellationToken::new();

        store.repository().insert(&category, &token).await.unwrap();
        assert_eq!(store.staged_count().await, 1);
        assert!(store.find_committed(category.id()).await.is_none());

        store.unit_of_work().commit(&token).await.unwrap();
        assert_eq!(store.staged_count().await, 0);
        assert_eq!(store.find_committed(category.id()).await, Some(category));
    }

    #[tokio::test]
    async fn duplicate_insert_rejected() {
        let store = InMemoryCategoryStore::new();
        let repository = store.repository();
        let category = Category::new("Action").unwrap();
        let token = CancellationToken::new();

        repository.insert(&category, &token).await.unwrap();
        let err = repository.insert(&category, &token).await.unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn cancelled_token_has_no_effect() {
        let store = InMemoryCategoryStore::new();
        let category = Category::new("Action").unwrap();
        let live = CancellationToken::new();
        let cancelled = CancellationToken::new();
        cancelled.cancel();

        let err = store.repository().insert(&category, &cancelled).await.unwrap_err();
        assert!(matches!(err, AppError::Cancelled(_)));
        assert_eq!(store.staged_count().await, 0);

        store.repository().insert(&category, &live).await.unwrap();
        let err = store.unit_of_work().commit(&cancelled).await.unwrap_err();
        assert!(matches!(err, AppError::Cancelled(_)));
        assert_eq!(store.staged_count().await, 1);
        assert_eq!(store.committed_count().await, 0);
    }
}
