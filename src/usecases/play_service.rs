//! Multi-level play: spin once per level, in order, until the session completes.
//!
//! The UI drives it step by step (`start_spin` -> animate -> `record`) so it can
//! draw the wheel while the timer runs; `play_through` does the same unattended.

use crate::domain::samples::DEMO_ID;
use crate::domain::{DecisionSet, DomainError, PlaySession};
use crate::ports::DecisionSetRepo;
use crate::usecases::wheel::{PendingSpin, SpinOutcome, Wheel};
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Pause between a level's result and the next wheel.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Whether completing a session stamps the set's last-used label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Usage {
    Tracked,
    Preview,
}

pub struct PlayService {
    wheel: Arc<Wheel>,
    repo: Arc<dyn DecisionSetRepo>,
    advance_delay: Duration,
}

impl PlayService {
    pub fn new(wheel: Arc<Wheel>, repo: Arc<dyn DecisionSetRepo>, advance_delay: Duration) -> Self {
        Self {
            wheel,
            repo,
            advance_delay,
        }
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// Spins the wheel for the session's current level.
    ///
    /// `None` when the session is complete, the level has no options, or the
    /// wheel is still spinning.
    pub fn start_spin(&self, session: &PlaySession, set: &DecisionSet) -> Option<PendingSpin> {
        let level = session.current_level(set)?;
        debug!(set = %set.id, level = %level.name, "spinning level");
        self.wheel.start(&level.options)
    }

    /// Records a resolved spin, waits the advance delay, then moves the session on.
    /// Marks the set as used once the last level is decided.
    pub async fn record(
        &self,
        session: &mut PlaySession,
        set: &DecisionSet,
        outcome: SpinOutcome,
    ) -> Result<(), DomainError> {
        self.advance(session, set, outcome, Usage::Tracked).await
    }

    /// Like [`record`](Self::record) for an editor preview: the store is never touched.
    pub async fn record_preview(
        &self,
        session: &mut PlaySession,
        set: &DecisionSet,
        outcome: SpinOutcome,
    ) -> Result<(), DomainError> {
        self.advance(session, set, outcome, Usage::Preview).await
    }

    /// Plays every remaining level without user input.
    pub async fn play_through(&self, set: &DecisionSet) -> Result<PlaySession, DomainError> {
        self.play_all(set, Usage::Tracked).await
    }

    /// Unattended preview of a draft. Does not count as use.
    pub async fn play_through_preview(
        &self,
        set: &DecisionSet,
    ) -> Result<PlaySession, DomainError> {
        self.play_all(set, Usage::Preview).await
    }

    async fn advance(
        &self,
        session: &mut PlaySession,
        set: &DecisionSet,
        outcome: SpinOutcome,
        usage: Usage,
    ) -> Result<(), DomainError> {
        if session.is_complete() {
            return Ok(());
        }
        if let Some(level) = session.current_level(set) {
            info!(set = %set.id, level = %level.name, pick = %outcome.option, "level decided");
        }
        tokio::time::sleep(self.advance_delay).await;
        session.record(outcome.option, set.levels.len());

        if session.is_complete() {
            self.finish(set, usage).await?;
        }
        Ok(())
    }

    async fn play_all(&self, set: &DecisionSet, usage: Usage) -> Result<PlaySession, DomainError> {
        let mut session = PlaySession::start(set);
        while let Some(level) = session.current_level(set) {
            let pending = self.start_spin(&session, set).ok_or_else(|| {
                DomainError::Wheel(format!("level '{}' cannot be spun", level.name))
            })?;
            let outcome = pending
                .resolve()
                .await
                .ok_or_else(|| DomainError::Wheel("spin timer dropped".into()))?;
            self.advance(&mut session, set, outcome, usage).await?;
        }
        if set.levels.is_empty() {
            self.finish(set, usage).await?;
        }
        Ok(session)
    }

    async fn finish(&self, set: &DecisionSet, usage: Usage) -> Result<(), DomainError> {
        info!(set = %set.id, title = %set.title, "decision complete");
        if usage == Usage::Preview || set.id == DEMO_ID {
            return Ok(());
        }
        let label = Local::now().format("%Y-%m-%d %H:%M").to_string();
        match self.repo.mark_used(&set.id, &label).await {
            Ok(_) => Ok(()),
            // Sets built outside the store, never saved.
            Err(DomainError::NotFound(id)) => {
                debug!(id = %id, "played set is not stored; last-used not recorded");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
