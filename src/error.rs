//! Error taxonomy for the simulation core
//!
//! There are exactly two failure classes: bad arguments at `start`/`generate`
//! time, and a state-machine operation invoked from the wrong phase. Neither
//! is recovered internally; both surface synchronously to the caller.

use std::fmt;

use crate::sim::RunPhase;

/// Errors surfaced by the simulation core
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Shape size (needle length / circle diameter) was zero or negative
    SizeNotPositive { size: f64 },
    /// Shape size was infinite or NaN
    SizeNotFinite { size: f64 },
    /// The requested trial count was zero
    TrialsIsZero,
    /// A runner operation was invoked from a phase it is not valid in
    InvalidState {
        op: &'static str,
        phase: RunPhase,
    },
}

impl std::error::Error for SimError {}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeNotPositive { size } => {
                write!(f, "shape size ({}) must be positive", size)
            }
            Self::SizeNotFinite { size } => {
                write!(f, "shape size ({}) was non-finite", size)
            }
            Self::TrialsIsZero => write!(f, "total trial count was zero"),
            Self::InvalidState { op, phase } => {
                write!(f, "`{}` is not valid in the {} phase", op, phase.as_str())
            }
        }
    }
}
