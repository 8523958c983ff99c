//! Typed identifiers for trials and the two agent roles within a trial.

use std::fmt;

/// Zero-based index of one independent trial within a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialId(pub u32);

impl fmt::Display for TrialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrialId({})", self.0)
    }
}

/// Which of the two agents in a trial.
///
/// `A` always starts at the line origin, `B` at the configured separation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentSlot {
    A,
    B,
}

impl AgentSlot {
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            AgentSlot::A => 0,
            AgentSlot::B => 1,
        }
    }
}
