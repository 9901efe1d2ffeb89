//! Draft edit operations on a decision set, bounded by an [`EditPolicy`].

use crate::domain::{DecisionSet, DomainError, Level, entities::new_id};

/// Floors enforced while editing: by default two options per level and one
/// level per set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditPolicy {
    pub min_options_per_level: usize,
    pub min_levels: usize,
}

impl Default for EditPolicy {
    fn default() -> Self {
        Self {
            min_options_per_level: 2,
            min_levels: 1,
        }
    }
}

impl EditPolicy {
    pub fn can_remove_option(&self, level: &Level) -> bool {
        level.options.len() > self.min_options_per_level
    }

    pub fn can_remove_level(&self, set: &DecisionSet) -> bool {
        set.levels.len() > self.min_levels
    }
}

impl DecisionSet {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Appends "Level {n+1}" with two placeholder options. Returns the new level id.
    pub fn add_level(&mut self) -> String {
        let id = new_id();
        let name = format!("Level {}", self.levels.len() + 1);
        self.levels
            .push(Level::new(id.clone(), name, &["Option 1", "Option 2"]));
        id
    }

    pub fn remove_level(&mut self, level_id: &str, policy: &EditPolicy) -> Result<Level, DomainError> {
        let pos = self.level_position(level_id)?;
        if !policy.can_remove_level(self) {
            return Err(DomainError::PolicyViolation(format!(
                "a decision set keeps at least {} level(s)",
                policy.min_levels
            )));
        }
        Ok(self.levels.remove(pos))
    }

    pub fn rename_level(&mut self, level_id: &str, name: impl Into<String>) -> Result<(), DomainError> {
        self.level_mut(level_id)?.name = name.into();
        Ok(())
    }

    /// Moves a level to `to` (clamped to the last position).
    pub fn move_level(&mut self, level_id: &str, to: usize) -> Result<(), DomainError> {
        let from = self.level_position(level_id)?;
        let level = self.levels.remove(from);
        let to = to.min(self.levels.len());
        self.levels.insert(to, level);
        Ok(())
    }

    /// Appends "Option {len+1}". Returns the new option's index.
    pub fn add_option(&mut self, level_id: &str) -> Result<usize, DomainError> {
        let level = self.level_mut(level_id)?;
        let label = format!("Option {}", level.options.len() + 1);
        level.options.push(label);
        Ok(level.options.len() - 1)
    }

    pub fn remove_option(
        &mut self,
        level_id: &str,
        index: usize,
        policy: &EditPolicy,
    ) -> Result<String, DomainError> {
        let level = self.level_mut(level_id)?;
        let len = level.options.len();
        if index >= len {
            return Err(DomainError::OutOfRange { index, len });
        }
        if !policy.can_remove_option(level) {
            return Err(DomainError::PolicyViolation(format!(
                "level '{}' keeps at least {} options",
                level.name, policy.min_options_per_level
            )));
        }
        Ok(level.options.remove(index))
    }

    pub fn update_option(
        &mut self,
        level_id: &str,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        let level = self.level_mut(level_id)?;
        let len = level.options.len();
        let slot = level
            .options
            .get_mut(index)
            .ok_or(DomainError::OutOfRange { index, len })?;
        *slot = value.into();
        Ok(())
    }

    /// Checks the set is playable: a title, at least one level, every wheel drawable.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidDraft("title is empty".into()));
        }
        if self.levels.is_empty() {
            return Err(DomainError::InvalidDraft("no levels".into()));
        }
        if let Some(level) = self.levels.iter().find(|l| !l.is_drawable()) {
            return Err(DomainError::InvalidDraft(format!(
                "level '{}' has no options",
                level.name
            )));
        }
        Ok(())
    }

    fn level_position(&self, level_id: &str) -> Result<usize, DomainError> {
        self.levels
            .iter()
            .position(|l| l.id == level_id)
            .ok_or_else(|| DomainError::LevelNotFound(level_id.to_string()))
    }

    fn level_mut(&mut self, level_id: &str) -> Result<&mut Level, DomainError> {
        self.levels
            .iter_mut()
            .find(|l| l.id == level_id)
            .ok_or_else(|| DomainError::LevelNotFound(level_id.to_string()))
    }
}
