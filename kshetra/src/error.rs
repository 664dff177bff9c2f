//! Planning error types.

use std::fmt;

use thiserror::Error;

/// Stage that hit its growth ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthStage {
    /// Flood-fill decomposition rounds
    FloodFillRounds,
    /// Flood-fill cell count
    FloodFillCells,
    /// Wavefront propagation rounds
    Wavefront,
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FloodFillRounds => write!(f, "flood fill rounds"),
            Self::FloodFillCells => write!(f, "flood fill cells"),
            Self::Wavefront => write!(f, "wavefront rounds"),
        }
    }
}

/// Errors returned by the planning pipeline.
///
/// Planning is deterministic, so none of these are worth retrying with the
/// same input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Rejected before decomposition (short perimeter, bad cell size, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backtracking ran out of stack before every cell was visited
    #[error("Coverage planning failed: visited {visited} of {total} cells")]
    PlanningFailure {
        /// Distinct cells visited before the stack emptied
        visited: usize,
        /// Occupied cells in the grid
        total: usize,
    },

    /// Growth did not terminate within the configured ceiling
    #[error("Unbounded growth: {stage} exceeded limit of {limit}")]
    UnboundedGrowth {
        /// Stage that overran
        stage: GrowthStage,
        /// Configured ceiling
        limit: usize,
    },
}

impl PlanError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::PlanningFailure { .. } => "PLANNING_FAILURE",
            Self::UnboundedGrowth { .. } => "UNBOUNDED_GROWTH",
        }
    }
}

/// Result alias for planning operations
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PlanError::PlanningFailure {
            visited: 3,
            total: 5,
        };
        assert_eq!(
            err.to_string(),
            "Coverage planning failed: visited 3 of 5 cells"
        );

        let err = PlanError::UnboundedGrowth {
            stage: GrowthStage::Wavefront,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "Unbounded growth: wavefront rounds exceeded limit of 10"
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(PlanError::InvalidInput("x".into()).code(), "INVALID_INPUT");
        assert_eq!(
            PlanError::UnboundedGrowth {
                stage: GrowthStage::FloodFillCells,
                limit: 1
            }
            .code(),
            "UNBOUNDED_GROWTH"
        );
    }
}
