//! `rdv-field` — the interaction physics of the line rendezvous simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`intensity`] | `intensity(t, cycle)` phase-intensity scalar field        |
//! | [`solver`]    | `Body`, `solve`, `InteractionModel` and its two models    |
//!
//! The crate is pure numerics: no RNG, no allocation, no dependencies.

pub mod intensity;
pub mod solver;


pub use intensity::{GOLDEN_RATIO, intensity};
pub use solver::{
    Body, FieldInteraction, InteractionModel, KinematicInteraction, solve, solve_kinematic,
};
