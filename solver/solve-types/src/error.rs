//! Error and outcome types for search queries.

use maze_grid::CellCoord;

/// Result type for search queries.
pub type SolveResult<T> = Result<T, SolveError>;

/// Outcomes and errors a search query can produce.
///
/// Not every variant is exceptional. `NoPathExists`, `NoGoalCells`,
/// `Cancelled` and `BudgetExhausted` are valid query outcomes the
/// Manager branches on (for example by re-exploring and re-solving).
/// `NonAdjacentStep` and `EmptyPath` indicate the engine itself is
/// unsound and should be treated as fatal.
///
/// # Example
///
/// ```
/// use maze_grid::CellCoord;
/// use solve_types::SolveError;
///
/// let outcome = SolveError::NoPathExists {
///     start: CellCoord::new(0, 0),
/// };
/// assert!(outcome.is_no_path());
/// assert!(outcome.is_outcome());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SolveError {
    /// The start cell falls outside the maze bounds.
    #[error("start cell {0} is outside the maze")]
    StartOutOfBounds(CellCoord),

    /// A goal cell falls outside the maze bounds.
    #[error("goal cell {0} is outside the maze")]
    GoalOutOfBounds(CellCoord),

    /// The goal is not reachable from the start.
    ///
    /// A normal result on disconnected or partially explored mazes; the
    /// caller typically reports incomplete exploration upward.
    #[error("no path exists from {start} to the goal")]
    NoPathExists {
        /// The start cell of the failed query.
        start: CellCoord,
    },

    /// The goal matches zero cells in the maze.
    #[error("goal matches no cell in the maze")]
    NoGoalCells,

    /// The cancellation token was set while the search was running.
    #[error("search cancelled after {nodes_expanded} cells")]
    Cancelled {
        /// Cells dequeued before the cancellation was observed.
        nodes_expanded: usize,
    },

    /// The configured node budget ran out before a goal was reached.
    #[error("search node budget of {budget} exhausted")]
    BudgetExhausted {
        /// The configured budget.
        budget: usize,
    },

    /// Two consecutive path cells are not one cardinal step apart.
    ///
    /// This is a defensive check in the move encoder; hitting it means
    /// the search engine produced an invalid path, not that the input
    /// maze was bad.
    #[error("path step {index} from {from} to {to} is not a single move")]
    NonAdjacentStep {
        /// Index of the offending step (0-based, counting moves).
        index: usize,
        /// Cell before the step.
        from: CellCoord,
        /// Cell after the step.
        to: CellCoord,
    },

    /// A path with no cells was handed to the move encoder.
    #[error("cannot encode an empty path")]
    EmptyPath,
}

impl SolveError {
    /// Returns `true` if this is the unreachable-goal outcome.
    #[must_use]
    pub const fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathExists { .. })
    }

    /// Returns `true` if the search was cooperatively cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Returns `true` for valid query outcomes the caller should branch
    /// on, as opposed to input errors or engine bugs.
    #[must_use]
    pub const fn is_outcome(&self) -> bool {
        matches!(
            self,
            Self::NoPathExists { .. }
                | Self::NoGoalCells
                | Self::Cancelled { .. }
                | Self::BudgetExhausted { .. }
        )
    }

    /// Returns `true` for variants that indicate an engine bug rather
    /// than bad input or a negative outcome.
    #[must_use]
    pub const fn is_engine_bug(&self) -> bool {
        matches!(self, Self::NonAdjacentStep { .. } | Self::EmptyPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_display_and_class() {
        let error = SolveError::NoPathExists {
            start: CellCoord::new(1, 2),
        };
        assert!(error.to_string().contains("(1, 2)"));
        assert!(error.is_no_path());
        assert!(error.is_outcome());
        assert!(!error.is_engine_bug());
    }

    #[test]
    fn test_cancelled_class() {
        let error = SolveError::Cancelled { nodes_expanded: 7 };
        assert!(error.is_cancelled());
        assert!(error.is_outcome());
        assert!(error.to_string().contains('7'));
    }

    #[test]
    fn test_out_of_bounds_is_input_error() {
        let error = SolveError::StartOutOfBounds(CellCoord::new(9, 9));
        assert!(!error.is_outcome());
        assert!(!error.is_engine_bug());
        assert!(error.to_string().contains("(9, 9)"));
    }

    #[test]
    fn test_non_adjacent_step_is_engine_bug() {
        let error = SolveError::NonAdjacentStep {
            index: 2,
            from: CellCoord::new(0, 0),
            to: CellCoord::new(2, 2),
        };
        assert!(error.is_engine_bug());
        assert!(!error.is_outcome());
        let msg = error.to_string();
        assert!(msg.contains("step 2"));
        assert!(msg.contains("(0, 0)"));
        assert!(msg.contains("(2, 2)"));
    }

    #[test]
    fn test_no_goal_cells_is_outcome() {
        assert!(SolveError::NoGoalCells.is_outcome());
    }
}
