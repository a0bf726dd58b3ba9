//! Simulated-progress state machine
//!
//! Route transitions expose no real progress, so the bar fabricates it:
//! quick random steps that stall just under a hold ceiling, then a forced
//! jump to 100 when the transition actually finishes. The machine is pure
//! state; the driver owns the clock and calls the transitions.
//!
//! # Lifecycle
//!
//! 1. Signal raised → `start()` → Ticking (percent 0, visible)
//! 2. Driver calls `advance()` every tick; percent creeps toward the hold
//! 3. Signal cleared → driver cancels its ticker and calls `complete()` → 100
//! 4. Completion delay elapses → `dismiss()` → Idle (hidden, percent 0)

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Timing and shape of the fabricated progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatorConfig {
    /// Delay between `advance` calls while ticking
    pub tick_interval: Duration,

    /// How long the full bar stays up after `complete`
    pub completion_delay: Duration,

    /// Percent the bar stalls at while the transition is still in flight
    pub hold_percent: f32,

    /// Upper bound of one random advance step
    pub max_step: f32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            completion_delay: Duration::from_millis(500),
            hold_percent: 90.0,
            max_step: 5.0,
        }
    }
}

/// Animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorPhase {
    /// Hidden, nothing in flight
    #[default]
    Idle,
    /// Creeping toward the hold percent
    Ticking,
    /// Full bar shown, dismissal pending
    Completing,
}

/// Progress state for one bar instance
///
/// Transitions return whether they happened, so drivers can tell a real
/// phase change from a redundant call without re-reading the phase.
#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    phase: AnimatorPhase,
    percent: f32,
    config: AnimatorConfig,
    rng: SmallRng,
}

impl ProgressAnimator {
    pub fn new(config: AnimatorConfig) -> Self {
        Self {
            phase: AnimatorPhase::Idle,
            percent: 0.0,
            config,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic step sequence, for tests
    pub fn with_seed(config: AnimatorConfig, seed: u64) -> Self {
        Self {
            phase: AnimatorPhase::Idle,
            percent: 0.0,
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> AnimatorPhase {
        self.phase
    }

    /// Current percent, in `[0, 100]`
    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Visible in every phase except Idle
    pub fn is_visible(&self) -> bool {
        self.phase != AnimatorPhase::Idle
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Enter Ticking
    ///
    /// From Idle or Completing the percent resets to zero and the bar
    /// becomes visible. While already Ticking this is a no-op: a redundant
    /// raise never rewinds progress in flight.
    pub fn start(&mut self) -> bool {
        match self.phase {
            AnimatorPhase::Ticking => false,
            AnimatorPhase::Idle | AnimatorPhase::Completing => {
                self.phase = AnimatorPhase::Ticking;
                self.percent = 0.0;
                debug!("progress ticking");
                true
            }
        }
    }

    /// One simulated step
    ///
    /// Adds a random amount in `[0, max_step)`, capped at the hold percent
    /// (itself capped at 100). Outside Ticking, or once the hold is reached,
    /// the percent stays put. Returns the percent after the step.
    pub fn advance(&mut self) -> f32 {
        let ceiling = self.config.hold_percent.min(100.0);
        if self.phase != AnimatorPhase::Ticking || self.percent >= ceiling {
            return self.percent;
        }
        // random_range panics on an empty range
        if self.config.max_step <= 0.0 {
            return self.percent;
        }
        let step = self.rng.random_range(0.0..self.config.max_step);
        self.percent = (self.percent + step).min(ceiling);
        trace!(percent = self.percent, "progress tick");
        self.percent
    }

    /// Enter Completing: the percent jumps to exactly 100
    ///
    /// Only legal from Ticking. The driver must stop its ticker before the
    /// completion delay starts, so no late step can land after the jump.
    pub fn complete(&mut self) -> bool {
        if self.phase != AnimatorPhase::Ticking {
            return false;
        }
        self.phase = AnimatorPhase::Completing;
        self.percent = 100.0;
        debug!("progress completing");
        true
    }

    /// Return to Idle once the completion delay has elapsed
    pub fn dismiss(&mut self) -> bool {
        if self.phase != AnimatorPhase::Completing {
            return false;
        }
        self.phase = AnimatorPhase::Idle;
        self.percent = 0.0;
        debug!("progress dismissed");
        true
    }
}
