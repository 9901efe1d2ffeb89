//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Decision set not found: {0}")]
    NotFound(String),

    #[error("Level not found: {0}")]
    LevelNotFound(String),

    #[error("Decision set already exists: {0}")]
    DuplicateId(String),

    /// Edit rejected by the active [`crate::domain::EditPolicy`].
    #[error("Edit rejected: {0}")]
    PolicyViolation(String),

    #[error("Invalid decision set: {0}")]
    InvalidDraft(String),

    #[error("Index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("Wheel error: {0}")]
    Wheel(String),

    #[error("Seed file error: {0}")]
    SeedFile(String),

    #[error("UI error: {0}")]
    Ui(String),

    /// User pressed Ctrl-C inside a prompt. Not a failure; the caller exits.
    #[error("Interrupted")]
    Interrupted,
}
