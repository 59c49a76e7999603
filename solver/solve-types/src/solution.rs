//! A completed search result.

use crate::path::CellPath;
use crate::stats::SearchStats;

/// The result of a successful search: the path plus how it was found.
///
/// The path is immutable once constructed; it is handed to the move
/// encoder as-is.
///
/// # Example
///
/// ```
/// use maze_grid::CellCoord;
/// use solve_types::{CellPath, SearchStats, Solution};
///
/// let path = CellPath::new(vec![CellCoord::new(0, 0), CellCoord::new(0, 1)]);
/// let solution = Solution::new(path).with_stats(SearchStats::new("BFS"));
///
/// assert_eq!(solution.path().move_count(), 1);
/// assert_eq!(solution.stats().algorithm(), "BFS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: CellPath,
    stats: SearchStats,
}

impl Solution {
    /// Creates a solution around the given path.
    #[must_use]
    pub fn new(path: CellPath) -> Self {
        Self {
            path,
            stats: SearchStats::default(),
        }
    }

    /// Attaches search statistics.
    #[must_use]
    pub fn with_stats(mut self, stats: SearchStats) -> Self {
        self.stats = stats;
        self
    }

    /// Returns the path.
    #[must_use]
    pub const fn path(&self) -> &CellPath {
        &self.path
    }

    /// Returns the search statistics.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consumes the solution, returning the path.
    #[must_use]
    pub fn into_path(self) -> CellPath {
        self.path
    }
}
