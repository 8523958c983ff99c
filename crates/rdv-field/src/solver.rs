//! Pairwise interaction solver.
//!
//! Given read-only snapshots of both agents at the start of a step, decide
//! whether they meet during the next `leg_duration` time units and, if so,
//! at what offset from the step start.
//!
//! # Check order
//!
//! ```text
//! ① coincidence   |Δx| < 1e-4                          → Some(0.0)
//! ② field bridge  |Δx| < radius · field_strength · 2.5   → Some(0.001)
//! ③ kinematic     straight-line crossing in [0, leg]     → Some(dt)
//! ④ otherwise                                            → None
//! ```
//!
//! The order and every threshold are load-bearing: the mean meeting time is
//! sensitive to each of them.  The `0.001` returned by ② is a fixed offset,
//! not a computed crossing time.

use crate::intensity::intensity;

/// Positions closer than this are already coincident.
pub const COINCIDENCE_EPS: f64 = 1e-4;

/// Relative speeds at or below this are treated as parallel motion.
pub const PARALLEL_EPS: f64 = 1e-9;

/// Floor added to the mean intensity so the field never vanishes.
pub const FIELD_BIAS: f64 = 0.5;

/// Multiplier from `radius · field_strength` to the effective radius.
pub const FIELD_REACH: f64 = 2.5;

/// Offset reported when the field bridge connects the agents.
pub const FIELD_MEETING_OFFSET: f64 = 0.001;

// ── Body ──────────────────────────────────────────────────────────────────────

/// Snapshot of one agent as seen by the solver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub position: f64,
    /// Signed velocity along the line.
    pub velocity: f64,
    /// The agent's leg counter (number of legs planned so far).
    pub cycle:    u32,
}

impl Body {
    #[inline]
    pub fn new(position: f64, velocity: f64, cycle: u32) -> Self {
        Self { position, velocity, cycle }
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Full heuristic check: steps ① to ④.
pub fn solve(t: f64, leg_duration: f64, a: &Body, b: &Body, radius: f64) -> Option<f64> {
    let gap = (a.position - b.position).abs();
    if gap < COINCIDENCE_EPS {
        return Some(0.0);
    }

    let field_strength = (intensity(t, a.cycle) + intensity(t, b.cycle)) / 2.0 + FIELD_BIAS;
    let effective_radius = radius * field_strength * FIELD_REACH;
    if gap < effective_radius {
        return Some(FIELD_MEETING_OFFSET);
    }

    crossing_time(leg_duration, a, b)
}

/// Classical check only: steps ①, ③ and ④ (the field bridge is disabled).
pub fn solve_kinematic(leg_duration: f64, a: &Body, b: &Body) -> Option<f64> {
    if (a.position - b.position).abs() < COINCIDENCE_EPS {
        return Some(0.0);
    }
    crossing_time(leg_duration, a, b)
}

/// Time at which two constant-velocity trajectories cross, if it falls
/// within `[0, leg_duration]`.
pub(crate) fn crossing_time(leg_duration: f64, a: &Body, b: &Body) -> Option<f64> {
    let rel_vel = a.velocity - b.velocity;
    if rel_vel.abs() <= PARALLEL_EPS {
        return None;
    }
    let dt = -(a.position - b.position) / rel_vel;
    (0.0..=leg_duration).contains(&dt).then_some(dt)
}

// ── InteractionModel trait ────────────────────────────────────────────────────

/// Pluggable meeting oracle used by the simulation driver.
///
/// `t` is global trial time at the start of the step, `leg_duration` the
/// length of the step, and `radius` the larger of the two agents' current
/// search radii.  Return the meeting offset within the step, or `None`.
pub trait InteractionModel {
    fn solve(&self, t: f64, leg_duration: f64, a: &Body, b: &Body, radius: f64) -> Option<f64>;
}

impl<T: InteractionModel + ?Sized> InteractionModel for &T {
    #[inline]
    fn solve(&self, t: f64, leg_duration: f64, a: &Body, b: &Body, radius: f64) -> Option<f64> {
        (**self).solve(t, leg_duration, a, b, radius)
    }
}

/// The heuristic field-superposition model.  This is the default.
#[derive(Copy, Clone, Debug, Default)]
pub struct FieldInteraction;

impl InteractionModel for FieldInteraction {
    #[inline]
    fn solve(&self, t: f64, leg_duration: f64, a: &Body, b: &Body, radius: f64) -> Option<f64> {
        solve(t, leg_duration, a, b, radius)
    }
}

/// Strict linear-motion collision model, ignoring the field.
#[derive(Copy, Clone, Debug, Default)]
pub struct KinematicInteraction;

impl InteractionModel for KinematicInteraction {
    #[inline]
    fn solve(&self, _t: f64, leg_duration: f64, a: &Body, b: &Body, _radius: f64) -> Option<f64> {
        solve_kinematic(leg_duration, a, b)
    }
}
