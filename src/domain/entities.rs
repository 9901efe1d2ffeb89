//! Domain entities. Pure data structures for the core business.
//!
//! No terminal/IO types here. Fields serialize as camelCase (`lastUsed`, `createdAt`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named, ordered collection of levels. Played top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionSet {
    pub id: String,
    pub title: String,
    pub description: String,
    pub levels: Vec<Level>,
    /// Free-form label shown on the dashboard ("Yesterday", "2024-05-01 19:30").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<String>,
    pub created_at: NaiveDate,
}

/// One wheel: a named list of options. Option order is segment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub options: Vec<String>,
}

impl Level {
    pub fn new(id: impl Into<String>, name: impl Into<String>, options: &[&str]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            options: options.iter().map(|o| (*o).to_string()).collect(),
        }
    }

    /// A level can be drawn as a wheel only with at least one option.
    pub fn is_drawable(&self) -> bool {
        !self.options.is_empty()
    }
}

impl DecisionSet {
    /// Fresh set for the editor's "new" route.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            id: new_id(),
            title: "New Decision Set".to_string(),
            description: "Add a description for your decision set".to_string(),
            levels: vec![Level {
                id: new_id(),
                name: "Level 1".to_string(),
                options: vec![
                    "Option 1".to_string(),
                    "Option 2".to_string(),
                    "Option 3".to_string(),
                ],
            }],
            last_used: None,
            created_at: today,
        }
    }

    pub fn level(&self, level_id: &str) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == level_id)
    }

    /// "1 level" / "3 levels".
    pub fn level_count_label(&self) -> String {
        let n = self.levels.len();
        format!("{} level{}", n, if n == 1 { "" } else { "s" })
    }

    /// Case-insensitive substring match on title or description.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.description.to_lowercase().contains(&q)
    }
}

/// New opaque identifier for sets and levels.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
