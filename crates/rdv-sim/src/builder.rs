//! Fluent builder for constructing a [`Sim`].

use rdv_core::SimConfig;
use rdv_field::InteractionModel;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<M>`].
///
/// Starts from [`SimConfig::default()`] (50 000 trials, separation 2.0,
/// horizon 1000, seed 42); every setter overrides one field.
///
/// | Method            | Default              |
/// |-------------------|----------------------|
/// | `.config(c)`      | `SimConfig::default` |
/// | `.trials(n)`      | 50 000               |
/// | `.separation(x)`  | 2.0                  |
/// | `.horizon(h)`     | 1000.0               |
/// | `.seed(s)`        | 42                   |
pub struct SimBuilder<M: InteractionModel> {
    config: SimConfig,
    model:  M,
}

impl<M: InteractionModel> SimBuilder<M> {
    pub fn new(model: M) -> Self {
        Self { config: SimConfig::default(), model }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn trials(mut self, trial_count: u32) -> Self {
        self.config.trial_count = trial_count;
        self
    }

    /// Starting position of agent B (agent A always starts at 0).
    pub fn separation(mut self, initial_separation: f64) -> Self {
        self.config.initial_separation = initial_separation;
        self
    }

    pub fn horizon(mut self, horizon: f64) -> Self {
        self.config.horizon = horizon;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        self.config.validate()?;
        Ok(Sim::new(self.config, self.model))
    }
}
