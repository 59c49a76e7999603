//! Error types for maze grid construction and lookup.

use std::fmt;

use crate::cell::{CellCoord, Direction};

/// Result type for maze grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// One disagreeing shared wall between two adjacent cells.
///
/// Cell `a` claims the wall toward `direction` has openness `a_open`,
/// while the neighboring cell `b` claims `b_open` for the same physical
/// wall seen from its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallConflict {
    /// The cell whose `direction` wall is in conflict.
    pub a: CellCoord,
    /// The neighbor on the other side of the shared wall.
    pub b: CellCoord,
    /// The direction of the shared wall as seen from `a`.
    pub direction: Direction,
    /// Openness claimed by `a`.
    pub a_open: bool,
    /// Openness claimed by `b`.
    pub b_open: bool,
}

impl fmt::Display for WallConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} says {} wall is {}, {} says {}",
            self.a,
            self.direction,
            if self.a_open { "open" } else { "closed" },
            self.b,
            if self.b_open { "open" } else { "closed" },
        )
    }
}

/// Errors that can occur when constructing or querying a [`crate::Maze`].
///
/// # Example
///
/// ```
/// use maze_grid::{CellCoord, GridError};
///
/// let error = GridError::OutOfBounds {
///     coord: CellCoord::new(9, 9),
///     width: 3,
///     height: 3,
/// };
/// assert!(error.to_string().contains("outside"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// A coordinate fell outside `[0, width) x [0, height)`.
    #[error("cell {coord} outside {width}x{height} maze")]
    OutOfBounds {
        /// The offending coordinate.
        coord: CellCoord,
        /// Maze width in cells.
        width: u32,
        /// Maze height in cells.
        height: u32,
    },

    /// A maze must have at least one cell in each dimension.
    #[error("maze must have non-zero dimensions, got {width}x{height}")]
    EmptyGrid {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },

    /// The cell buffer length does not match `width * height`.
    #[error("expected {expected} cells for a {width}x{height} maze, got {got}")]
    CellCountMismatch {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Expected cell count (`width * height`).
        expected: usize,
        /// Actual cell count supplied.
        got: usize,
    },

    /// Adjacent cells disagree about one or more shared walls.
    ///
    /// Carries every violating edge, not just the first, so the maze
    /// producer can fix all of them in one pass.
    #[error("{} disagreeing shared wall(s){}", .0.len(), first_conflict(.0))]
    InconsistentWalls(Vec<WallConflict>),
}

fn first_conflict(conflicts: &[WallConflict]) -> String {
    conflicts
        .first()
        .map_or_else(String::new, |conflict| format!(", first: {conflict}"))
}

impl GridError {
    /// Returns `true` if this is an out-of-bounds lookup error.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns the full list of wall conflicts, if this is an
    /// [`GridError::InconsistentWalls`] error.
    #[must_use]
    pub fn conflicts(&self) -> Option<&[WallConflict]> {
        match self {
            Self::InconsistentWalls(conflicts) => Some(conflicts),
            _ => None,
        }
    }
}
