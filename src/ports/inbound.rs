//! Inbound port. UI (adapter) calls into the application.

use crate::domain::{DomainError, Route};

/// Input port: UI/CLI drives the application starting from a route.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive loop until the user quits.
    async fn run(&self, start: Route) -> Result<(), DomainError>;

    /// Play `start` unattended and print the decision. Non-play routes are rejected.
    async fn run_auto(&self, start: Route) -> Result<(), DomainError>;
}
