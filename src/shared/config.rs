//! Application configuration. Timings, edit policy, seeding, start route.

use crate::domain::{EditPolicy, Route};
use serde::Deserialize;
use std::time::Duration;

/// Wheel animation length in ms. The outcome is revealed only after it elapses.
pub const DEFAULT_SPIN_DURATION_MS: u64 = 4000;
/// Pause between levels in ms.
pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1500;
/// Redraw interval of the spin animation in ms.
pub const DEFAULT_FRAME_MS: u64 = 50;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Spin duration in ms. Read from DECIDE_NOW_SPIN_DURATION_MS.
    #[serde(default)]
    pub spin_duration_ms: Option<u64>,

    /// Delay after each level's result in ms. Read from DECIDE_NOW_ADVANCE_DELAY_MS.
    #[serde(default)]
    pub advance_delay_ms: Option<u64>,

    /// Animation frame interval in ms. Read from DECIDE_NOW_FRAME_MS.
    #[serde(default)]
    pub frame_ms: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Editing policy
    // ─────────────────────────────────────────────────────────────────────────
    /// Minimum options kept per level (default 2). Read from DECIDE_NOW_MIN_OPTIONS.
    #[serde(default)]
    pub min_options: Option<usize>,

    /// Minimum levels kept per set (default 1). Read from DECIDE_NOW_MIN_LEVELS.
    #[serde(default)]
    pub min_levels: Option<usize>,

    // ─────────────────────────────────────────────────────────────────────────
    // Startup
    // ─────────────────────────────────────────────────────────────────────────
    /// Fixed RNG seed for reproducible spins. Read from DECIDE_NOW_SEED.
    #[serde(default)]
    pub seed: Option<u64>,

    /// JSON file with the initial decision sets. Read from DECIDE_NOW_SEED_FILE.
    #[serde(default)]
    pub seed_file: Option<String>,

    /// Route opened at startup, e.g. "/play/demo". Read from DECIDE_NOW_START_ROUTE.
    #[serde(default)]
    pub start_route: Option<String>,

    /// Print the banner at startup (default true). Read from DECIDE_NOW_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,

    /// Play the start route unattended and exit. Read from DECIDE_NOW_AUTO_PLAY.
    #[serde(default)]
    pub auto_play: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("DECIDE_NOW_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Environment wins over the file.
        c = c.add_source(config::Environment::with_prefix("DECIDE_NOW").try_parsing(true));
        c.build()?.try_deserialize()
    }

    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms.unwrap_or(DEFAULT_SPIN_DURATION_MS))
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms.unwrap_or(DEFAULT_ADVANCE_DELAY_MS))
    }

    /// Frame interval; never zero so the animation ticker stays valid.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.unwrap_or(DEFAULT_FRAME_MS).max(1))
    }

    /// Edit floors. A level always keeps at least one option so it stays drawable.
    pub fn edit_policy(&self) -> EditPolicy {
        let defaults = EditPolicy::default();
        EditPolicy {
            min_options_per_level: self
                .min_options
                .unwrap_or(defaults.min_options_per_level)
                .max(1),
            min_levels: self.min_levels.unwrap_or(defaults.min_levels).max(1),
        }
    }

    pub fn start_route(&self) -> Route {
        self.start_route
            .as_deref()
            .map(Route::parse)
            .unwrap_or_default()
    }

    pub fn show_banner(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play.unwrap_or(false)
    }
}
