use thiserror::Error;

use riesz_core::{DegenerateError, EnergyError, OrderingError, SubsetError};

use crate::selection::Precondition;

/// Errors that can occur during a DP run.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid ordering: {0}")]
    InvalidOrdering(#[from] OrderingError),

    #[error("cannot select {k} of {n} points")]
    InfeasibleSelection { k: usize, n: usize },

    #[error("degenerate sequence: {0}")]
    DegenerateSequence(#[from] DegenerateError),

    #[error("reconstructed an invalid subset: {0}")]
    InvalidSubset(#[from] SubsetError),

    #[error("every subset of size {size} has non-finite energy")]
    NoFiniteSelection { size: usize },

    #[error("stopped by observer after filling size {size}")]
    StoppedByObserver { size: usize },
}

impl From<Precondition> for Error {
    fn from(err: Precondition) -> Self {
        match err {
            Precondition::Ordering(e) => Self::InvalidOrdering(e),
            Precondition::Infeasible { k, n } => Self::InfeasibleSelection { k, n },
        }
    }
}

impl From<EnergyError> for Error {
    fn from(err: EnergyError) -> Self {
        match err {
            EnergyError::InvalidSubset(e) => Self::InvalidSubset(e),
            EnergyError::Degenerate(e) => Self::DegenerateSequence(e),
        }
    }
}
