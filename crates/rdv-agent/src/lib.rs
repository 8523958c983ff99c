//! `rdv-agent` — the searching agent.
//!
//! An [`Agent`] alternates between planning a leg and travelling it, forever.
//! Leg `k` (zero-based) heads to `origin ± 2^k` at unit speed, with the sign
//! drawn from the agent's own [`AgentRng`][rdv_core::AgentRng].  The trial
//! driver in `rdv-sim` decides when to stop.

pub mod agent;


pub use agent::{Agent, LEG_COMPLETE_EPS, SPEED};
