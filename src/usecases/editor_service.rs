//! Editor use case: open a draft, edit it in place, commit on save.
//!
//! Drafts are plain copies; nothing reaches the store until `save`.

use crate::domain::{DecisionSet, DomainError, EditPolicy, EditorTarget};
use crate::ports::DecisionSetRepo;
use chrono::Local;
use std::sync::Arc;
use tracing::info;

/// Editable copy of a decision set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub set: DecisionSet,
    pub is_new: bool,
}

impl Draft {
    pub fn heading(&self) -> &'static str {
        if self.is_new {
            "Create Decision Set"
        } else {
            "Edit Decision Set"
        }
    }
}

pub struct EditorService {
    repo: Arc<dyn DecisionSetRepo>,
    policy: EditPolicy,
}

impl EditorService {
    pub fn new(repo: Arc<dyn DecisionSetRepo>, policy: EditPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> &EditPolicy {
        &self.policy
    }

    pub async fn open(&self, target: &EditorTarget) -> Result<Draft, DomainError> {
        match target {
            EditorTarget::New => Ok(Draft {
                set: DecisionSet::blank(Local::now().date_naive()),
                is_new: true,
            }),
            EditorTarget::Existing(id) => {
                let set = self
                    .repo
                    .find(id)
                    .await?
                    .ok_or_else(|| DomainError::NotFound(id.clone()))?;
                Ok(Draft { set, is_new: false })
            }
        }
    }

    /// Validates and commits the draft. Returns the id it was stored under.
    ///
    /// The stored last-used label wins over the draft's copy, which may be stale.
    pub async fn save(&self, draft: Draft) -> Result<String, DomainError> {
        draft.set.validate()?;
        let id = draft.set.id.clone();
        let mut set = draft.set;
        if draft.is_new {
            self.repo.create(set).await?;
        } else {
            if let Some(stored) = self.repo.find(&id).await? {
                set.last_used = stored.last_used;
            }
            self.repo.update(set).await?;
        }
        info!(id = %id, "draft saved");
        Ok(id)
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id).await.map(|_| ())
    }
}
