//! Run configuration.
//!
//! `SimConfig` is a plain value built in code (or deserialised by the
//! application when the `serde` feature is on).  It is validated once by
//! `rdv_sim::SimBuilder::build` before any trial runs.

use crate::{RdvError, RdvResult};

/// Trials per run when the caller does not say otherwise.
pub const DEFAULT_TRIAL_COUNT: u32 = 50_000;

/// Starting distance between agent A (at 0) and agent B.
pub const DEFAULT_SEPARATION: f64 = 2.0;

/// Simulated time after which a trial that has not met is abandoned.
pub const DEFAULT_HORIZON: f64 = 1_000.0;

pub const DEFAULT_SEED: u64 = 42;

/// Top-level run configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of independent trials to average over.  Must be at least 1.
    pub trial_count: u32,

    /// Initial position of agent B; agent A starts at 0.  Must be finite and
    /// non-negative.
    pub initial_separation: f64,

    /// Per-trial time ceiling.  No new step starts once global time reaches
    /// this value; a trial that has not met records the time its last step
    /// ended.
    pub horizon: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trial_count:        DEFAULT_TRIAL_COUNT,
            initial_separation: DEFAULT_SEPARATION,
            horizon:            DEFAULT_HORIZON,
            seed:               DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Default configuration with the two headline parameters overridden.
    pub fn with_trials(trial_count: u32, initial_separation: f64) -> Self {
        Self { trial_count, initial_separation, ..Self::default() }
    }

    /// Reject configurations that would produce an empty or undefined mean.
    pub fn validate(&self) -> RdvResult<()> {
        if self.trial_count == 0 {
            return Err(RdvError::InvalidArgument(
                "trial_count must be at least 1".into(),
            ));
        }
        if !self.initial_separation.is_finite() || self.initial_separation < 0.0 {
            return Err(RdvError::InvalidArgument(format!(
                "initial_separation must be finite and non-negative, got {}",
                self.initial_separation
            )));
        }
        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(RdvError::InvalidArgument(format!(
                "horizon must be finite and positive, got {}",
                self.horizon
            )));
        }
        Ok(())
    }
}
