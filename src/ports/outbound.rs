//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Catalog, DecisionSet, DomainError};

/// Decision set store. Every mutation returns the catalog snapshot it produced,
/// so callers never observe a half-applied change.
#[async_trait::async_trait]
pub trait DecisionSetRepo: Send + Sync {
    /// Current snapshot.
    async fn list(&self) -> Result<Catalog, DomainError>;

    async fn find(&self, id: &str) -> Result<Option<DecisionSet>, DomainError>;

    /// Append a new set. Fails with `DuplicateId` if the id is taken.
    async fn create(&self, set: DecisionSet) -> Result<Catalog, DomainError>;

    /// Replace the set with the same id. Fails with `NotFound` otherwise.
    async fn update(&self, set: DecisionSet) -> Result<Catalog, DomainError>;

    /// Remove exactly one set; the rest keep their order.
    async fn delete(&self, id: &str) -> Result<Catalog, DomainError>;

    /// Set the "last used" label shown on the dashboard.
    async fn mark_used(&self, id: &str, label: &str) -> Result<Catalog, DomainError>;
}
