//! Application use cases. Orchestrate domain logic via ports.

pub mod editor_service;
pub mod navigator;
pub mod play_service;
pub mod wheel;

pub use editor_service::{Draft, EditorService};
pub use navigator::{Navigator, Screen};
pub use play_service::PlayService;
pub use wheel::{PendingSpin, SpinMotion, SpinOutcome, Wheel, WheelState};
