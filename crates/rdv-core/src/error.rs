//! Core error type.
//!
//! Downstream crates wrap `RdvError` as one variant of their own enum
//! (see `rdv_sim::SimError`) rather than growing this one.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RdvError {
    /// A caller-supplied value is outside the accepted domain
    /// (zero trials, negative separation, non-finite horizon, …).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand result type for the `rdv-*` crates.
pub type RdvResult<T> = Result<T, RdvError>;
