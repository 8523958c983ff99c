//! The `Sim` struct and its trial loop.

use rdv_agent::Agent;
use rdv_core::{AgentRng, AgentSlot, SimConfig, TrialId};
use rdv_field::{FieldInteraction, InteractionModel};
use tracing::{debug, info};

use crate::{NoopObserver, RunSummary, SimBuilder, SimResult, TrialObserver};

// ── TrialOutcome ──────────────────────────────────────────────────────────────

/// How one trial ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TrialOutcome {
    /// The interaction model reported a meeting at global time `time`.
    Met { time: f64 },
    /// No meeting before the horizon.  `time` is global time when the loop
    /// stopped: the end of the step that crossed the horizon, so usually
    /// past it.
    TimedOut { time: f64 },
}

impl TrialOutcome {
    /// The time this trial contributes to the run mean.
    #[inline]
    pub fn time(&self) -> f64 {
        match *self {
            TrialOutcome::Met { time } | TrialOutcome::TimedOut { time } => time,
        }
    }

    #[inline]
    pub fn is_met(&self) -> bool {
        matches!(self, TrialOutcome::Met { .. })
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The Monte Carlo runner.
///
/// Holds a validated [`SimConfig`] and the [`InteractionModel`] consulted at
/// every step.  Trials share no state: each builds two fresh agents with RNGs
/// derived from `(config.seed, TrialId, AgentSlot)`, so any single trial can
/// be replayed with [`run_trial`][Self::run_trial].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: InteractionModel> {
    config: SimConfig,
    model:  M,
}

impl<M: InteractionModel> Sim<M> {
    pub(crate) fn new(config: SimConfig, model: M) -> Self {
        Self { config, model }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run every trial in order and aggregate the outcomes.
    pub fn run<O: TrialObserver>(&self, observer: &mut O) -> SimResult<RunSummary> {
        info!(
            trials     = self.config.trial_count,
            separation = self.config.initial_separation,
            horizon    = self.config.horizon,
            seed       = self.config.seed,
            "run starting"
        );
        observer.on_run_start(&self.config);

        let mut outcomes = Vec::with_capacity(self.config.trial_count as usize);
        for i in 0..self.config.trial_count {
            let trial = TrialId(i);
            observer.on_trial_start(trial);
            let outcome = self.run_trial(trial);
            debug!(trial = %trial, time = outcome.time(), met = outcome.is_met(), "trial finished");
            observer.on_trial_end(trial, &outcome);
            outcomes.push(outcome);
        }

        let summary = RunSummary::from_outcomes(&outcomes)?;
        info!(
            mean      = summary.mean,
            met       = summary.met,
            timed_out = summary.timed_out,
            "run complete"
        );
        observer.on_run_end(&summary);
        Ok(summary)
    }

    /// Run one trial to a meeting or the horizon.
    pub fn run_trial(&self, trial: TrialId) -> TrialOutcome {
        let mut rng_a = AgentRng::new(self.config.seed, trial, AgentSlot::A);
        let mut rng_b = AgentRng::new(self.config.seed, trial, AgentSlot::B);
        let mut a = Agent::new(0.0, &mut rng_a);
        let mut b = Agent::new(self.config.initial_separation, &mut rng_b);

        let mut t = 0.0;
        while t < self.config.horizon {
            // Step to whichever leg boundary comes first.
            let dt = a.remaining().min(b.remaining());
            let radius = a.search_radius().max(b.search_radius());

            if let Some(offset) = self.model.solve(t, dt, &a.body(), &b.body(), radius) {
                return TrialOutcome::Met { time: t + offset };
            }

            t += dt;
            a.advance(dt);
            b.advance(dt);

            if a.leg_complete() {
                a.plan_leg(&mut rng_a);
            }
            if b.leg_complete() {
                b.plan_leg(&mut rng_b);
            }
        }

        TrialOutcome::TimedOut { time: t }
    }
}

/// Mean meeting time over `trial_count` trials with agent B starting at
/// `initial_separation`, using the field model and default seed and horizon.
///
/// Fails with `InvalidArgument` for zero trials or a negative/non-finite
/// separation.
pub fn run_trials(trial_count: u32, initial_separation: f64) -> SimResult<f64> {
    let sim = SimBuilder::new(FieldInteraction)
        .trials(trial_count)
        .separation(initial_separation)
        .build()?;
    Ok(sim.run(&mut NoopObserver)?.mean)
}
