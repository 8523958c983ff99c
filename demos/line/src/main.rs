//! line — reference run of the two-agent rendezvous experiment.
//!
//! Usage: `line [trials] [separation] [seed]`
//!
//! Defaults reproduce the reference run: 50 000 trials, agents 2.0 apart,
//! seed 42.  Set `RUST_LOG=debug` to see every trial outcome.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rdv_core::{SimConfig, TrialId};
use rdv_field::FieldInteraction;
use rdv_sim::{RunSummary, SimBuilder, TrialObserver, TrialOutcome};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Mean meeting time the experiment is trying to beat.
const THRESHOLD: f64 = 4.25;

/// Log progress this many times over a run.
const PROGRESS_STEPS: u32 = 10;

// ── Progress observer ─────────────────────────────────────────────────────────

struct Progress {
    every: u32,
    total: u32,
    met:   usize,
}

impl Progress {
    fn new() -> Self {
        Self { every: 1, total: 0, met: 0 }
    }
}

impl TrialObserver for Progress {
    fn on_run_start(&mut self, config: &SimConfig) {
        self.total = config.trial_count;
        self.every = (config.trial_count / PROGRESS_STEPS).max(1);
    }

    fn on_trial_end(&mut self, trial: TrialId, outcome: &TrialOutcome) {
        if outcome.is_met() {
            self.met += 1;
        }
        let done = trial.0 + 1;
        if done % self.every == 0 || done == self.total {
            info!(done, total = self.total, met = self.met, "progress");
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        info!(mean = summary.mean, "all trials finished");
    }
}

// ── Arguments ─────────────────────────────────────────────────────────────────

fn parse_config() -> Result<SimConfig> {
    let mut config = SimConfig::default();
    let mut args = std::env::args().skip(1);

    if let Some(arg) = args.next() {
        config.trial_count = arg
            .parse()
            .with_context(|| format!("trials must be a positive integer, got {arg:?}"))?;
    }
    if let Some(arg) = args.next() {
        config.initial_separation = arg
            .parse()
            .with_context(|| format!("separation must be a number, got {arg:?}"))?;
    }
    if let Some(arg) = args.next() {
        config.seed = arg
            .parse()
            .with_context(|| format!("seed must be an unsigned integer, got {arg:?}"))?;
    }
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = parse_config()?;
    println!("=== line — two-agent rendezvous, field interaction model ===");
    println!(
        "Trials: {}  |  Separation: {}  |  Horizon: {}  |  Seed: {}",
        config.trial_count, config.initial_separation, config.horizon, config.seed
    );
    println!();

    let sim = SimBuilder::new(FieldInteraction).config(config).build()?;

    let t0 = Instant::now();
    let summary = sim.run(&mut Progress::new())?;
    let elapsed = t0.elapsed();

    println!();
    println!("{}", "=".repeat(60));
    println!(" Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(" Met: {}  |  Timed out: {}", summary.met, summary.timed_out);
    println!(" Min: {:.5}  |  Max: {:.5}", summary.min, summary.max);
    println!(" Average meeting time R = {:.5}", summary.mean);
    println!("{}", "=".repeat(60));

    if summary.mean < THRESHOLD {
        println!("BELOW THRESHOLD: {:.5} < {THRESHOLD}", summary.mean);
    } else {
        println!("RESULT: {:.5} (threshold {THRESHOLD})", summary.mean);
    }

    Ok(())
}
