//! Built-in decision sets: the starter catalog and the demo set.

use crate::domain::{DecisionSet, Level};
use chrono::NaiveDate;

/// Id of the demo set. Reachable via `/play/demo`, never stored in the catalog.
pub const DEMO_ID: &str = "demo";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Catalog contents when no seed file is configured.
pub fn starter_sets() -> Vec<DecisionSet> {
    vec![
        DecisionSet {
            id: "1".into(),
            title: "Friday Night Plans".into(),
            description: "What should we do this Friday? Spin to decide the perfect evening."
                .into(),
            levels: vec![
                Level::new(
                    "1-1",
                    "Activity Type",
                    &["Stay Home", "Go Out", "Adventure", "Relaxation"],
                ),
                Level::new(
                    "1-2",
                    "Specific Activity",
                    &[
                        "Movie Night",
                        "Board Games",
                        "Dinner Out",
                        "Bar Hopping",
                        "Hiking",
                        "Spa Day",
                    ],
                ),
                Level::new("1-3", "Time", &["6 PM", "7 PM", "8 PM", "9 PM"]),
            ],
            last_used: Some("2 days ago".into()),
            created_at: date(2024, 1, 15),
        },
        DecisionSet {
            id: "2".into(),
            title: "Lunch Decider".into(),
            description: "Can't decide what to eat? Let the wheel choose for you!".into(),
            levels: vec![
                Level::new(
                    "2-1",
                    "Cuisine",
                    &[
                        "Italian",
                        "Mexican",
                        "Asian",
                        "American",
                        "Mediterranean",
                        "Indian",
                    ],
                ),
                Level::new(
                    "2-2",
                    "Style",
                    &["Fast Food", "Sit Down", "Takeout", "Delivery"],
                ),
            ],
            last_used: Some("Yesterday".into()),
            created_at: date(2024, 1, 10),
        },
        DecisionSet {
            id: "3".into(),
            title: "Team Building Activity".into(),
            description: "Decide on the next team outing with your colleagues.".into(),
            levels: vec![
                Level::new("3-1", "Type", &["Indoor", "Outdoor", "Virtual", "Hybrid"]),
                Level::new(
                    "3-2",
                    "Activity",
                    &[
                        "Escape Room",
                        "Bowling",
                        "Cooking Class",
                        "Trivia Night",
                        "Volunteer Day",
                        "Karaoke",
                    ],
                ),
                Level::new("3-3", "Day", &["Monday", "Wednesday", "Friday"]),
            ],
            last_used: Some("1 week ago".into()),
            created_at: date(2024, 1, 5),
        },
    ]
}

pub fn demo_set() -> DecisionSet {
    DecisionSet {
        id: DEMO_ID.into(),
        title: "What Should I Do Today?".into(),
        description: "A demo decision set to show you how DecideNow works!".into(),
        levels: vec![
            Level::new(
                "demo-1",
                "Activity Type",
                &["Productive", "Relaxing", "Social", "Creative", "Adventure"],
            ),
            Level::new(
                "demo-2",
                "Specific Activity",
                &[
                    "Work on a project",
                    "Read a book",
                    "Call a friend",
                    "Draw or paint",
                    "Go for a walk",
                    "Learn something new",
                ],
            ),
        ],
        last_used: None,
        created_at: date(2024, 1, 1),
    }
}
