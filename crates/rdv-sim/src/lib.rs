//! `rdv-sim` — Monte Carlo driver for the line rendezvous simulator.
//!
//! # Trial loop
//!
//! ```text
//! A at 0, B at separation, t = 0
//! while t < horizon:
//!   dt     = min(A.remaining, B.remaining)
//!   radius = max(A.search_radius, B.search_radius)
//!   ① Solve    — model.solve(t, dt, A, B, radius); Some(offset) → met at t + offset
//!   ② Advance  — t += dt; both agents move dt along their legs
//!   ③ Re-plan  — every agent whose leg is complete plans the next one
//! timed out → record t (the end of the step that crossed the horizon)
//! ```
//!
//! A run repeats this for `config.trial_count` independent trials and reports
//! the sample mean (plus the rest of [`RunSummary`]).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rdv_field::FieldInteraction;
//! use rdv_sim::{NoopObserver, SimBuilder};
//!
//! let sim = SimBuilder::new(FieldInteraction).trials(1_000).seed(7).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("mean meeting time {:.5}", summary.mean);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TrialObserver};
pub use sim::{Sim, TrialOutcome, run_trials};
pub use summary::RunSummary;
