//! Core domain layer. No external I/O dependencies.
//!
//! Entities, wheel math and editing rules live here. Dependencies flow inward.

pub mod catalog;
pub mod editing;
pub mod entities;
pub mod errors;
pub mod motion;
pub mod route;
pub mod samples;
pub mod session;
pub mod wheel;

pub use catalog::Catalog;
pub use editing::EditPolicy;
pub use entities::{DecisionSet, Level};
pub use errors::DomainError;
pub use route::{EditorTarget, Route};
pub use session::PlaySession;
