//! Catalog: immutable snapshot of all stored decision sets.
//!
//! Mutations never touch `self`; they return the next snapshot. The store
//! adapter swaps snapshots, views only ever read one.

use crate::domain::{DecisionSet, DomainError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    sets: Vec<DecisionSet>,
}

impl Catalog {
    pub fn new(sets: Vec<DecisionSet>) -> Self {
        Self { sets }
    }

    pub fn sets(&self) -> &[DecisionSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&DecisionSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    /// Sets whose title or description contains `query` (case-insensitive). Order preserved.
    pub fn search(&self, query: &str) -> Vec<&DecisionSet> {
        self.sets.iter().filter(|s| s.matches(query)).collect()
    }

    /// New snapshot with `set` appended.
    pub fn created(&self, set: DecisionSet) -> Result<Self, DomainError> {
        if self.find(&set.id).is_some() {
            return Err(DomainError::DuplicateId(set.id));
        }
        let mut sets = self.sets.clone();
        sets.push(set);
        Ok(Self { sets })
    }

    /// New snapshot with the entry of the same id replaced in place.
    pub fn updated(&self, set: DecisionSet) -> Result<Self, DomainError> {
        let pos = self.position(&set.id)?;
        let mut sets = self.sets.clone();
        sets[pos] = set;
        Ok(Self { sets })
    }

    /// New snapshot without `id`. Remaining entries keep their relative order.
    pub fn deleted(&self, id: &str) -> Result<Self, DomainError> {
        let pos = self.position(id)?;
        let mut sets = self.sets.clone();
        sets.remove(pos);
        Ok(Self { sets })
    }

    /// New snapshot with `last_used` of `id` set to `label`.
    pub fn touched(&self, id: &str, label: impl Into<String>) -> Result<Self, DomainError> {
        let pos = self.position(id)?;
        let mut sets = self.sets.clone();
        sets[pos].last_used = Some(label.into());
        Ok(Self { sets })
    }

    fn position(&self, id: &str) -> Result<usize, DomainError> {
        self.sets
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::samples;

    fn ids(c: &Catalog) -> Vec<&str> {
        c.sets().iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let catalog = Catalog::new(samples::starter_sets());
        assert_eq!(ids(&catalog), vec!["1", "2", "3"]);

        let next = catalog.deleted("2").unwrap();

        assert_eq!(ids(&next), vec!["1", "3"]);
        // Old snapshot untouched.
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let catalog = Catalog::new(samples::starter_sets());
        let err = catalog.deleted("nope").unwrap_err();
        assert_eq!(err, DomainError::NotFound("nope".into()));
    }

    #[test]
    fn create_appends_and_rejects_duplicates() {
        let catalog = Catalog::new(samples::starter_sets());
        let mut extra = samples::demo_set();
        extra.id = "4".into();

        let next = catalog.created(extra.clone()).unwrap();
        assert_eq!(ids(&next), vec!["1", "2", "3", "4"]);

        let err = next.created(extra).unwrap_err();
        assert_eq!(err, DomainError::DuplicateId("4".into()));
    }

    #[test]
    fn update_replaces_in_place() {
        let catalog = Catalog::new(samples::starter_sets());
        let mut lunch = catalog.find("2").unwrap().clone();
        lunch.title = "Dinner Decider".into();

        let next = catalog.updated(lunch).unwrap();

        assert_eq!(ids(&next), vec!["1", "2", "3"]);
        assert_eq!(next.find("2").unwrap().title, "Dinner Decider");
        assert_eq!(catalog.find("2").unwrap().title, "Lunch Decider");
    }

    #[test]
    fn touched_sets_last_used_label() {
        let catalog = Catalog::new(samples::starter_sets());
        let next = catalog.touched("3", "just now").unwrap();
        assert_eq!(next.find("3").unwrap().last_used.as_deref(), Some("just now"));
    }

    #[test]
    fn search_filters_by_title_and_description() {
        let catalog = Catalog::new(samples::starter_sets());
        let titles: Vec<&str> = catalog
            .search("decide")
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        // "Lunch Decider" by title, "Friday Night Plans" and "Team Building" by description.
        assert_eq!(
            titles,
            vec!["Friday Night Plans", "Lunch Decider", "Team Building Activity"]
        );
        assert!(catalog.search("karaoke").is_empty());
    }
}
