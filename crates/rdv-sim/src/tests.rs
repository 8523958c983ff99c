//! Integration tests for rdv-sim.

use rdv_field::{Body, InteractionModel};

use crate::{NoopObserver, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Model that never reports a meeting, so every trial runs past the horizon.
struct NeverMeet;

impl InteractionModel for NeverMeet {
    fn solve(&self, _t: f64, _leg: f64, _a: &Body, _b: &Body, _radius: f64) -> Option<f64> {
        None
    }
}

/// Model that records every step it is asked about.
#[derive(Default)]
struct StepRecorder {
    steps: std::cell::RefCell<Vec<(f64, f64, f64)>>,
}

impl InteractionModel for StepRecorder {
    fn solve(&self, t: f64, leg: f64, _a: &Body, _b: &Body, radius: f64) -> Option<f64> {
        self.steps.borrow_mut().push((t, leg, radius));
        None
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use rdv_core::{RdvError, SimConfig};
    use rdv_field::FieldInteraction;

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(FieldInteraction).build().unwrap();
        assert_eq!(sim.config(), &SimConfig::default());
    }

    #[test]
    fn setters_override_config() {
        let sim = SimBuilder::new(FieldInteraction)
            .trials(12)
            .separation(3.0)
            .horizon(50.0)
            .seed(9)
            .build()
            .unwrap();
        let cfg = sim.config();
        assert_eq!(cfg.trial_count, 12);
        assert_eq!(cfg.initial_separation, 3.0);
        assert_eq!(cfg.horizon, 50.0);
        assert_eq!(cfg.seed, 9);
    }

    #[test]
    fn zero_trials_rejected() {
        let result = SimBuilder::new(FieldInteraction).trials(0).build();
        assert!(matches!(result, Err(SimError::Core(RdvError::InvalidArgument(_)))));
    }

    #[test]
    fn negative_separation_rejected() {
        let result = SimBuilder::new(NeverMeet).separation(-0.5).build();
        assert!(matches!(result, Err(SimError::Core(RdvError::InvalidArgument(_)))));
    }

    #[test]
    fn whole_config_can_be_supplied() {
        let cfg = SimConfig::with_trials(3, 1.0);
        let sim = SimBuilder::new(NeverMeet).config(cfg.clone()).build().unwrap();
        assert_eq!(sim.config(), &cfg);
    }
}

// ── Trial loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trial_tests {
    use rdv_core::TrialId;
    use rdv_field::{FieldInteraction, KinematicInteraction};

    use super::*;
    use crate::TrialOutcome;

    #[test]
    fn coincident_start_meets_at_zero() {
        let sim = SimBuilder::new(FieldInteraction).trials(20).separation(0.0).build().unwrap();
        for i in 0..20 {
            assert_eq!(sim.run_trial(TrialId(i)), TrialOutcome::Met { time: 0.0 });
        }
    }

    #[test]
    fn field_meets_on_first_step_at_reference_separation() {
        // Both agents start on cycle 1 with radius 1: the effective radius
        // at t = 0 is about 4.6, wider than the gap of 2.
        let sim = SimBuilder::new(FieldInteraction).trials(10).build().unwrap();
        for i in 0..10 {
            assert_eq!(sim.run_trial(TrialId(i)), TrialOutcome::Met { time: 0.001 });
        }
    }

    #[test]
    fn never_meeting_records_loop_exit_time() {
        // The final leg usually carries global time well past the horizon.
        let sim = SimBuilder::new(NeverMeet).trials(5).build().unwrap();
        let expected = [1_064.0, 1_404.0, 1_160.0, 2_170.0, 1_278.0];
        for (i, &time) in expected.iter().enumerate() {
            assert_eq!(sim.run_trial(TrialId(i as u32)), TrialOutcome::TimedOut { time });
        }
    }

    #[test]
    fn short_horizon_records_end_of_first_step() {
        let sim = SimBuilder::new(NeverMeet).trials(1).horizon(0.5).build().unwrap();
        assert_eq!(sim.run_trial(TrialId(0)), TrialOutcome::TimedOut { time: 1.0 });
    }

    #[test]
    fn timeout_time_is_sum_of_steps() {
        for i in 0..8 {
            let recorder = StepRecorder::default();
            let sim = SimBuilder::new(&recorder).trials(8).build().unwrap();
            let outcome = sim.run_trial(TrialId(i));

            let total = recorder.steps.borrow().iter().fold(0.0, |t, &(_, leg, _)| t + leg);
            assert!(!outcome.is_met());
            assert!(outcome.time() >= 1_000.0, "t = {}", outcome.time());
            assert_eq!(outcome.time(), total);
        }
    }

    #[test]
    fn steps_follow_leg_boundaries() {
        let recorder = StepRecorder::default();
        let sim = SimBuilder::new(&recorder)
            .trials(1)
            .separation(7.0)
            .horizon(200.0)
            .build()
            .unwrap();
        sim.run_trial(TrialId(0));

        let steps = recorder.steps.borrow();
        assert!(!steps.is_empty());

        // First step: both agents are on a unit leg with radius 1.
        assert_eq!(steps[0], (0.0, 1.0, 1.0));

        let mut prev_t = -1.0;
        let mut prev_radius = 0.0;
        for &(t, leg, radius) in steps.iter() {
            assert!(t > prev_t, "time must increase: {prev_t} -> {t}");
            assert!(t < 200.0);
            assert!(leg > 0.0);
            assert!(radius >= prev_radius, "radius must not shrink");
            assert_eq!(radius.log2().fract(), 0.0, "radius {radius} is a power of two");
            prev_t = t;
            prev_radius = radius;
        }
    }

    #[test]
    fn kinematic_outcomes_are_well_formed() {
        let sim = SimBuilder::new(KinematicInteraction)
            .trials(200)
            .separation(2.0)
            .build()
            .unwrap();
        for i in 0..200 {
            match sim.run_trial(TrialId(i)) {
                TrialOutcome::Met { time } => assert!(time >= 0.0, "t = {time}"),
                TrialOutcome::TimedOut { time } => assert!(time >= 1_000.0, "t = {time}"),
            }
        }
    }

    #[test]
    fn run_trial_replays_run_outcome() {
        let sim = SimBuilder::new(KinematicInteraction)
            .trials(30)
            .separation(5.0)
            .seed(1234)
            .build()
            .unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        for i in [0u32, 7, 29] {
            assert_eq!(sim.run_trial(TrialId(i)).time(), summary.times[i as usize]);
        }
    }
}

// ── Run aggregation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use rdv_core::{RdvError, SimConfig, TrialId};
    use rdv_field::{FieldInteraction, KinematicInteraction};

    use super::*;
    use crate::{RunSummary, SimError, TrialObserver, TrialOutcome, run_trials};

    #[test]
    fn reference_baseline_mean() {
        let mean = run_trials(1_000, 2.0).unwrap();
        assert!((mean - 0.001).abs() < 1e-12, "mean = {mean}");
    }

    #[test]
    fn zero_separation_mean_is_zero() {
        assert_eq!(run_trials(100, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn zero_trials_is_invalid_argument() {
        assert!(matches!(
            run_trials(0, 2.0),
            Err(SimError::Core(RdvError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn same_seed_same_result() {
        let build = || {
            SimBuilder::new(FieldInteraction)
                .trials(1_000)
                .separation(9.0)
                .seed(77)
                .build()
                .unwrap()
        };
        let first = build().run(&mut NoopObserver).unwrap();
        let second = build().run(&mut NoopObserver).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_legs_baseline_mean() {
        // Separation 9 is outside the first-step field reach, so the mean
        // depends on the direction draws and the leg schedule.
        let sim = SimBuilder::new(FieldInteraction)
            .trials(1_000)
            .separation(9.0)
            .seed(77)
            .build()
            .unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert!((summary.mean - 3.253).abs() < 1e-9, "mean = {}", summary.mean);
        assert_eq!(summary.met, 1_000);
        assert!((summary.min - 2.001).abs() < 1e-9, "min = {}", summary.min);
        assert!((summary.max - 10.001).abs() < 1e-9, "max = {}", summary.max);
    }

    #[test]
    fn timeout_run_averages_loop_exit_times() {
        let sim = SimBuilder::new(NeverMeet).trials(4).build().unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.times, vec![1_064.0, 1_404.0, 1_160.0, 2_170.0]);
        assert_eq!(summary.mean, 1_449.5);
        assert!(summary.min >= 1_000.0);
        assert_eq!(summary.timed_out, 4);
        assert_eq!(summary.met, 0);
    }

    #[test]
    fn met_and_timed_out_partition_trials() {
        let sim = SimBuilder::new(KinematicInteraction)
            .trials(100)
            .separation(3.0)
            .build()
            .unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.trial_count(), 100);
        assert_eq!(summary.met + summary.timed_out, 100);
        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
    }

    /// Observer that counts callbacks.
    #[derive(Default)]
    struct Counter {
        runs_started: usize,
        starts:       usize,
        ends:         usize,
        last_trial:   Option<TrialId>,
        final_mean:   Option<f64>,
    }

    impl TrialObserver for Counter {
        fn on_run_start(&mut self, _config: &SimConfig) { self.runs_started += 1; }
        fn on_trial_start(&mut self, _trial: TrialId) { self.starts += 1; }
        fn on_trial_end(&mut self, trial: TrialId, _outcome: &TrialOutcome) {
            self.ends += 1;
            self.last_trial = Some(trial);
        }
        fn on_run_end(&mut self, summary: &RunSummary) { self.final_mean = Some(summary.mean); }
    }

    #[test]
    fn observer_hooks_fire_per_trial() {
        let sim = SimBuilder::new(FieldInteraction).trials(25).build().unwrap();
        let mut counter = Counter::default();
        let summary = sim.run(&mut counter).unwrap();
        assert_eq!(counter.runs_started, 1);
        assert_eq!(counter.starts, 25);
        assert_eq!(counter.ends, 25);
        assert_eq!(counter.last_trial, Some(TrialId(24)));
        assert_eq!(counter.final_mean, Some(summary.mean));
    }

    #[test]
    fn summary_of_mixed_outcomes() {
        let outcomes = [
            TrialOutcome::Met { time: 1.0 },
            TrialOutcome::Met { time: 3.0 },
            TrialOutcome::TimedOut { time: 8.0 },
        ];
        let summary = RunSummary::from_outcomes(&outcomes).unwrap();
        assert_eq!(summary.times, vec![1.0, 3.0, 8.0]);
        assert_eq!(summary.mean, 4.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 8.0);
        assert_eq!(summary.met, 2);
        assert_eq!(summary.timed_out, 1);
    }

    #[test]
    fn empty_summary_is_an_error() {
        assert!(matches!(RunSummary::from_outcomes(&[]), Err(SimError::EmptyRun)));
    }
}
