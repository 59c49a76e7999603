//! Goal specification for maze searches.

use maze_grid::CellCoord;

/// What a search query is aiming for.
///
/// A goal is either a single target cell, or any cell out of a set (the
/// frontier case during exploration-time planning: breadth-first search
/// reaches the *nearest* member of the set first, so no re-scan is
/// needed). Arbitrary predicates are served by the engine's
/// `solve_where` entry point instead of a variant here.
///
/// # Example
///
/// ```
/// use maze_grid::CellCoord;
/// use solve_types::SolveGoal;
///
/// let single = SolveGoal::cell(2, 2);
/// assert!(single.matches(CellCoord::new(2, 2)));
/// assert!(!single.matches(CellCoord::new(0, 0)));
///
/// let frontier = SolveGoal::any_of(vec![
///     CellCoord::new(0, 1),
///     CellCoord::new(1, 0),
/// ]);
/// assert!(frontier.matches(CellCoord::new(1, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveGoal {
    /// A single target cell.
    Cell(CellCoord),
    /// Any cell out of this set, nearest first.
    AnyOf(Vec<CellCoord>),
}

impl SolveGoal {
    /// Creates a single-cell goal.
    #[must_use]
    pub const fn cell(row: u32, col: u32) -> Self {
        Self::Cell(CellCoord::new(row, col))
    }

    /// Creates a goal satisfied by any cell of the given set.
    #[must_use]
    pub const fn any_of(cells: Vec<CellCoord>) -> Self {
        Self::AnyOf(cells)
    }

    /// Returns `true` if the given cell satisfies this goal.
    #[must_use]
    pub fn matches(&self, coord: CellCoord) -> bool {
        match self {
            Self::Cell(target) => *target == coord,
            Self::AnyOf(cells) => cells.contains(&coord),
        }
    }

    /// Returns `true` if no cell can ever satisfy this goal
    /// (an empty set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Cell(_) => false,
            Self::AnyOf(cells) => cells.is_empty(),
        }
    }

    /// Returns the goal cells, one for [`SolveGoal::Cell`] or the whole
    /// set for [`SolveGoal::AnyOf`].
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        match self {
            Self::Cell(target) => std::slice::from_ref(target),
            Self::AnyOf(cells) => cells,
        }
    }
}
