//! Wiring & DI. Entry point: load config, build the store, inject into services, run UI.
//! No business logic here.

use decide_now::adapters::memory::{InMemoryStore, load_seed_file};
use decide_now::adapters::ui::{self, tui::TuiInputPort};
use decide_now::domain::{Catalog, DomainError, samples};
use decide_now::ports::{DecisionSetRepo, InputPort};
use decide_now::shared::config::AppConfig;
use decide_now::usecases::{EditorService, Navigator, PlayService, Wheel};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    // Default to warn so log lines don't interleave with the prompts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded; using defaults");
        AppConfig::default()
    });
    info!(?cfg, "configuration");

    if cfg.show_banner() && !cfg.auto_play() {
        ui::init_ui();
    } else {
        ui::apply_theme();
    }

    // --- Store: seed file if configured, else the built-in samples ---
    let catalog = match cfg.seed_file.as_deref() {
        Some(path) => load_seed_file(path)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        None => Catalog::new(samples::starter_sets()),
    };
    let repo: Arc<dyn DecisionSetRepo> = Arc::new(InMemoryStore::new(catalog));

    // --- Wheel: fixed seed for reproducible runs ---
    let wheel = Arc::new(match cfg.seed {
        Some(seed) => {
            info!(seed, "wheel seeded");
            Wheel::seeded(seed, cfg.spin_duration())
        }
        None => Wheel::from_entropy(cfg.spin_duration()),
    });

    // --- Services ---
    let editor = Arc::new(EditorService::new(Arc::clone(&repo), cfg.edit_policy()));
    let navigator = Arc::new(Navigator::new(Arc::clone(&repo), Arc::clone(&editor)));
    let play = Arc::new(PlayService::new(
        wheel,
        Arc::clone(&repo),
        cfg.advance_delay(),
    ));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&repo),
        navigator,
        editor,
        play,
        cfg.frame_interval(),
    ));

    let start = cfg.start_route();
    let result = if cfg.auto_play() {
        input_port.run_auto(start).await
    } else {
        input_port.run(start).await
    };

    match result {
        Ok(()) | Err(DomainError::Interrupted) => Ok(()),
        Err(e) => Err(anyhow::anyhow!("{}", e)),
    }
}
