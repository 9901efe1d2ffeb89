//! Spinning wheel: `Idle -> Spinning -> Idle`.
//!
//! - `start` plans the target rotation and flips to `Spinning`; requests while
//!   spinning or with no options are ignored
//! - a spawned timer task owns the `Spinning -> Idle` transition and sends the
//!   outcome; dropping the [`PendingSpin`] does not cancel it
//! - randomness is injected, so a seeded wheel is fully reproducible

use crate::domain::motion::rotation_at;
use crate::domain::wheel::{plan_rotation, winning_index};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// How long a spin animates before the outcome is revealed.
pub const DEFAULT_SPIN_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelState {
    Idle,
    Spinning { target: f64 },
}

/// Resolved spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub index: usize,
    pub option: String,
    /// Accumulated rotation the wheel came to rest at.
    pub rotation: f64,
}

/// Start/end of a spin in time and angle. Enough to animate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinMotion {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub started: Instant,
}

impl SpinMotion {
    /// Fraction of the spin elapsed, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.started.elapsed().as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Rotation to draw right now.
    pub fn rotation_now(&self) -> f64 {
        rotation_at(self.from, self.to, self.progress())
    }
}

/// Handle to an in-flight spin.
pub struct PendingSpin {
    motion: SpinMotion,
    rx: oneshot::Receiver<SpinOutcome>,
}

impl PendingSpin {
    pub fn motion(&self) -> SpinMotion {
        self.motion
    }

    /// Waits for the timer to elapse. `None` only if the timer task died.
    pub async fn resolve(self) -> Option<SpinOutcome> {
        match self.rx.await {
            Ok(outcome) => Some(outcome),
            Err(_) => {
                warn!("spin timer dropped before resolving");
                None
            }
        }
    }
}

struct WheelInner {
    rotation: f64,
    state: WheelState,
    rng: Box<dyn RngCore + Send>,
}

pub struct Wheel {
    inner: Arc<Mutex<WheelInner>>,
    spin_duration: Duration,
}

fn lock(inner: &Mutex<WheelInner>) -> MutexGuard<'_, WheelInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Wheel {
    pub fn new(rng: impl RngCore + Send + 'static, spin_duration: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(WheelInner {
                rotation: 0.0,
                state: WheelState::Idle,
                rng: Box::new(rng),
            })),
            spin_duration,
        }
    }

    pub fn seeded(seed: u64, spin_duration: Duration) -> Self {
        Self::new(StdRng::seed_from_u64(seed), spin_duration)
    }

    pub fn from_entropy(spin_duration: Duration) -> Self {
        Self::new(StdRng::from_entropy(), spin_duration)
    }

    pub fn spin_duration(&self) -> Duration {
        self.spin_duration
    }

    pub fn state(&self) -> WheelState {
        lock(&self.inner).state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state(), WheelState::Spinning { .. })
    }

    /// Accumulated rotation (the target of the last started spin).
    pub fn rotation(&self) -> f64 {
        lock(&self.inner).rotation
    }

    /// Starts a spin over `options`. Must run inside a tokio runtime.
    ///
    /// Returns `None`, changing nothing, when `options` is empty or a spin is in flight.
    pub fn start(&self, options: &[String]) -> Option<PendingSpin> {
        if options.is_empty() {
            debug!("spin ignored: no options");
            return None;
        }

        let (from, to) = {
            let mut inner = lock(&self.inner);
            if let WheelState::Spinning { target } = inner.state {
                debug!(target, "spin ignored: already spinning");
                return None;
            }
            let from = inner.rotation;
            let to = plan_rotation(from, &mut *inner.rng);
            inner.rotation = to;
            inner.state = WheelState::Spinning { target: to };
            (from, to)
        };
        debug!(from, to, segments = options.len(), "spin started");

        let (tx, rx) = oneshot::channel();
        let inner = Arc::clone(&self.inner);
        let options = options.to_vec();
        let duration = self.spin_duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let index = winning_index(to, options.len());
            let outcome = SpinOutcome {
                index,
                option: options[index].clone(),
                rotation: to,
            };
            lock(&inner).state = WheelState::Idle;
            info!(index, option = %outcome.option, "spin resolved");
            // Receiver may be gone; the wheel is idle again either way.
            let _ = tx.send(outcome);
        });

        Some(PendingSpin {
            motion: SpinMotion {
                from,
                to,
                duration,
                started: Instant::now(),
            },
            rx,
        })
    }

    /// Start and wait for the result in one call.
    pub async fn spin(&self, options: &[String]) -> Option<SpinOutcome> {
        self.start(options)?.resolve().await
    }
}
