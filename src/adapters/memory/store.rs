//! Implements DecisionSetRepo in memory.
//!
//! Holds one catalog snapshot and swaps it on every mutation. Nothing survives
//! the process.

use crate::domain::{Catalog, DecisionSet, DomainError};
use crate::ports::DecisionSetRepo;
use tokio::sync::RwLock;
use tracing::info;

pub struct InMemoryStore {
    catalog: RwLock<Catalog>,
}

impl InMemoryStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    /// Apply `f` to the current snapshot and store its result.
    async fn swap<F>(&self, f: F) -> Result<Catalog, DomainError>
    where
        F: FnOnce(&Catalog) -> Result<Catalog, DomainError>,
    {
        let mut guard = self.catalog.write().await;
        let next = f(&guard)?;
        *guard = next.clone();
        Ok(next)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

#[async_trait::async_trait]
impl DecisionSetRepo for InMemoryStore {
    async fn list(&self) -> Result<Catalog, DomainError> {
        Ok(self.catalog.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<DecisionSet>, DomainError> {
        Ok(self.catalog.read().await.find(id).cloned())
    }

    async fn create(&self, set: DecisionSet) -> Result<Catalog, DomainError> {
        let id = set.id.clone();
        let next = self.swap(|c| c.created(set)).await?;
        info!(id = %id, total = next.len(), "decision set created");
        Ok(next)
    }

    async fn update(&self, set: DecisionSet) -> Result<Catalog, DomainError> {
        let id = set.id.clone();
        let next = self.swap(|c| c.updated(set)).await?;
        info!(id = %id, "decision set updated");
        Ok(next)
    }

    async fn delete(&self, id: &str) -> Result<Catalog, DomainError> {
        let next = self.swap(|c| c.deleted(id)).await?;
        info!(id, total = next.len(), "decision set deleted");
        Ok(next)
    }

    async fn mark_used(&self, id: &str, label: &str) -> Result<Catalog, DomainError> {
        self.swap(|c| c.touched(id, label)).await
    }
}
