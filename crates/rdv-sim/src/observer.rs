//! Run observer trait for progress reporting and data collection.

use rdv_core::{SimConfig, TrialId};

use crate::{RunSummary, TrialOutcome};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] around each trial.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress { every: u32 }
///
/// impl TrialObserver for Progress {
///     fn on_trial_end(&mut self, trial: TrialId, _outcome: &TrialOutcome) {
///         if (trial.0 + 1) % self.every == 0 {
///             println!("{} trials done", trial.0 + 1);
///         }
///     }
/// }
/// ```
pub trait TrialObserver {
    /// Called once, after validation and before the first trial.
    fn on_run_start(&mut self, _config: &SimConfig) {}

    fn on_trial_start(&mut self, _trial: TrialId) {}

    /// Called after each trial with the recorded outcome.
    fn on_trial_end(&mut self, _trial: TrialId, _outcome: &TrialOutcome) {}

    /// Called once after the last trial, with the aggregated result.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`TrialObserver`] that does nothing.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}
