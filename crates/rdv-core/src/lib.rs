//! `rdv-core` — foundational types for the line rendezvous simulator.
//!
//! Every other `rdv-*` crate depends on this one.  It has no `rdv-*`
//! dependencies and only `rand` and `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `TrialId`, `AgentSlot`                            |
//! | [`config`]  | `SimConfig` and the default run constants         |
//! | [`rng`]     | `AgentRng` (per agent per trial)                  |
//! | [`error`]   | `RdvError`, `RdvResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `SimConfig` and IDs. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{RdvError, RdvResult};
pub use ids::{AgentSlot, TrialId};
pub use rng::AgentRng;
