//! Deterministic per-agent RNG.
//!
//! # Determinism strategy
//!
//! Every agent of every trial gets its own `SmallRng` seeded by:
//!
//!   stream = trial * 2 + slot
//!   seed   = global_seed XOR (stream * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream numbers uniformly across the seed space.
//! Consequently:
//!
//! - The two agents of a trial never share RNG state.
//! - A trial's draws depend only on the global seed and its `TrialId`, so
//!   running a subset of trials, or running them in another order, does not
//!   change any individual trial's outcome.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentSlot, TrialId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-agent deterministic RNG, created fresh for each trial.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed, the trial and the
    /// agent's role in it.
    pub fn new(global_seed: u64, trial: TrialId, slot: AgentSlot) -> Self {
        let stream = (trial.0 as u64) * 2 + slot.index() as u64;
        let seed = global_seed ^ stream.wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Unit step along the line: `+1.0` or `-1.0` with equal probability.
    #[inline]
    pub fn direction(&mut self) -> f64 {
        if self.0.gen_bool(0.5) { 1.0 } else { -1.0 }
    }
}
