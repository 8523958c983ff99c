//! Aggregated result of a run.

use crate::{SimError, SimResult, TrialOutcome};

/// Per-run statistics over all recorded meeting times.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Recorded time of every trial, in trial order.  Timed-out trials
    /// contribute the time at which their loop stopped.
    pub times:     Vec<f64>,
    /// Arithmetic mean of `times`.
    pub mean:      f64,
    pub min:       f64,
    pub max:       f64,
    /// Trials that ended in a meeting.
    pub met:       usize,
    /// Trials that hit the horizon.
    pub timed_out: usize,
}

impl RunSummary {
    /// Aggregate a non-empty slice of outcomes.
    pub fn from_outcomes(outcomes: &[TrialOutcome]) -> SimResult<Self> {
        if outcomes.is_empty() {
            return Err(SimError::EmptyRun);
        }

        let times: Vec<f64> = outcomes.iter().map(TrialOutcome::time).collect();
        let met = outcomes.iter().filter(|o| o.is_met()).count();
        let mean = times.iter().sum::<f64>() / times.len() as f64;
        let min = times.iter().copied().fold(f64::INFINITY, f64::min);
        let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            mean,
            min,
            max,
            met,
            timed_out: outcomes.len() - met,
            times,
        })
    }

    #[inline]
    pub fn trial_count(&self) -> usize {
        self.times.len()
    }
}
