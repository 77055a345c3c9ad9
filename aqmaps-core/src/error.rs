use crate::coordinates::{Coordinate, Heading};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways the drone can fail to produce its next move.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationError {
    /// None of the 36 headings leads to a clear position.
    #[error("no feasible heading from {from}")]
    NoFeasibleHeading { from: Coordinate },

    /// Stuck recovery gave up without finding an escape heading.
    #[error("stuck recovery from {from} failed after {attempts} attempts (rejected heading {rejected})")]
    RecoveryFailed {
        from: Coordinate,
        rejected: Heading,
        attempts: u32,
    },
}

pub type Result<T> = std::result::Result<T, NavigationError>;
