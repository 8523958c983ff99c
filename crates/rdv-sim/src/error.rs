use rdv_core::RdvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] RdvError),

    #[error("cannot summarise a run with no trial outcomes")]
    EmptyRun,
}

pub type SimResult<T> = Result<T, SimError>;
