//! Play session: one result per level, in level order. Never persisted.

use crate::domain::{DecisionSet, Level};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaySession {
    current_level: usize,
    results: Vec<String>,
    complete: bool,
}

impl PlaySession {
    /// Session for `set`. A set without levels has nothing to spin and starts complete.
    pub fn start(set: &DecisionSet) -> Self {
        Self {
            complete: set.levels.is_empty(),
            ..Self::default()
        }
    }

    pub fn current_level_index(&self) -> usize {
        self.current_level
    }

    /// Level waiting for a spin, `None` once complete.
    pub fn current_level<'a>(&self, set: &'a DecisionSet) -> Option<&'a Level> {
        if self.complete {
            return None;
        }
        set.levels.get(self.current_level)
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Records the pick for the current level, then advances or completes.
    /// Ignored once complete.
    pub fn record(&mut self, result: impl Into<String>, total_levels: usize) {
        if self.complete {
            return;
        }
        self.results.push(result.into());
        if self.current_level + 1 < total_levels {
            self.current_level += 1;
        } else {
            self.complete = true;
        }
    }

    /// Back to the first level with no results ("Spin Again").
    pub fn reset(&mut self, set: &DecisionSet) {
        *self = Self::start(set);
    }

    /// "Level i of N", clamped to N.
    pub fn level_label(&self, total_levels: usize) -> String {
        format!(
            "Level {} of {}",
            (self.current_level + 1).min(total_levels),
            total_levels
        )
    }

    pub fn progress_percent(&self, total_levels: usize) -> u8 {
        if total_levels == 0 {
            return 100;
        }
        ((self.results.len() as f64 / total_levels as f64) * 100.0).round() as u8
    }

    /// (level name, pick) pairs so far.
    pub fn decisions<'a>(&'a self, set: &'a DecisionSet) -> Vec<(&'a str, &'a str)> {
        set.levels
            .iter()
            .zip(self.results.iter())
            .map(|(l, r)| (l.name.as_str(), r.as_str()))
            .collect()
    }
}
