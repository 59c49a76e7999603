//! Breadth-first search over the maze adjacency relation.
//!
//! All cell-to-cell moves cost the same, so breadth-first order visits
//! cells in non-decreasing distance from the start and the first goal
//! cell dequeued ends an optimal path. Neighbors are visited in the
//! fixed order north, east, south, west, which makes the returned path
//! deterministic and reproducible.
//!
//! # Example
//!
//! ```
//! use maze_grid::{CellCoord, Direction, MazeBuilder};
//! use solve_bfs::MazeBfs;
//! use solve_types::{BfsConfig, SolveGoal};
//!
//! let maze = MazeBuilder::new(3, 1)
//!     .open(CellCoord::new(0, 0), Direction::East)
//!     .unwrap()
//!     .open(CellCoord::new(0, 1), Direction::East)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let engine = MazeBfs::new(&maze, BfsConfig::default());
//! let solution = engine
//!     .solve(CellCoord::new(0, 0), &SolveGoal::cell(0, 2))
//!     .unwrap();
//! assert_eq!(solution.path().move_count(), 2);
//! ```

use std::collections::VecDeque;
use std::time::Instant;

use maze_grid::{CellCoord, Maze};
use solve_types::{
    BfsConfig, CancelToken, CellPath, SearchStats, Solution, SolveError, SolveGoal, SolveResult,
};
use tracing::debug;

/// Breadth-first pathfinder over a maze.
///
/// Borrows the maze immutably and owns all per-query traversal state,
/// so any number of engines may search the same maze concurrently.
pub struct MazeBfs<'a> {
    /// The maze being searched.
    maze: &'a Maze,
    /// Query limits.
    config: BfsConfig,
}

impl<'a> MazeBfs<'a> {
    /// Creates an engine over the given maze with the given limits.
    #[must_use]
    pub const fn new(maze: &'a Maze, config: BfsConfig) -> Self {
        Self { maze, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &BfsConfig {
        &self.config
    }

    /// Finds a shortest block-wise path from `start` to the goal.
    ///
    /// With a multi-cell goal the nearest member is reached first by
    /// construction; no re-scan happens.
    ///
    /// # Errors
    ///
    /// - [`SolveError::StartOutOfBounds`] / [`SolveError::GoalOutOfBounds`]
    ///   on coordinates outside the maze
    /// - [`SolveError::NoGoalCells`] if the goal set is empty
    /// - [`SolveError::NoPathExists`] if no goal cell is reachable
    /// - [`SolveError::Cancelled`] / [`SolveError::BudgetExhausted`] per
    ///   the configured limits
    pub fn solve(&self, start: CellCoord, goal: &SolveGoal) -> SolveResult<Solution> {
        if goal.is_empty() {
            return Err(SolveError::NoGoalCells);
        }
        for &cell in goal.cells() {
            if !self.maze.contains(cell) {
                return Err(SolveError::GoalOutOfBounds(cell));
            }
        }
        self.run(start, |cell| goal.matches(cell))
    }

    /// Finds a shortest path from `start` to any cell satisfying the
    /// predicate (for example "unexplored frontier" during live
    /// exploration).
    ///
    /// # Errors
    ///
    /// As [`MazeBfs::solve`], except that an exhausted search is
    /// reported as [`SolveError::NoGoalCells`] when the predicate
    /// matches no cell of the maze at all.
    pub fn solve_where<F>(&self, start: CellCoord, predicate: F) -> SolveResult<Solution>
    where
        F: Fn(CellCoord) -> bool,
    {
        match self.run(start, &predicate) {
            Err(SolveError::NoPathExists { .. }) if !self.any_cell_matches(&predicate) => {
                Err(SolveError::NoGoalCells)
            }
            other => other,
        }
    }

    fn any_cell_matches<F: Fn(CellCoord) -> bool>(&self, predicate: &F) -> bool {
        (0..self.maze.height())
            .flat_map(|row| (0..self.maze.width()).map(move |col| CellCoord::new(row, col)))
            .any(|coord| predicate(coord))
    }

    /// The search loop proper. The cancellation flag is polled once per
    /// dequeue; the loop is bounded by the cell count, so it terminates
    /// on disconnected mazes.
    fn run<F>(&self, start: CellCoord, is_goal: F) -> SolveResult<Solution>
    where
        F: Fn(CellCoord) -> bool,
    {
        if !self.maze.contains(start) {
            return Err(SolveError::StartOutOfBounds(start));
        }

        let started = Instant::now();
        let width = self.maze.width() as usize;
        let index_of = |coord: CellCoord| coord.row as usize * width + coord.col as usize;

        let mut visited = vec![false; self.maze.cell_count()];
        let mut parent = vec![start; self.maze.cell_count()];
        let mut queue = VecDeque::new();
        let mut expanded = 0_usize;

        visited[index_of(start)] = true;
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            if self.config.cancel().is_some_and(CancelToken::is_cancelled) {
                debug!(nodes_expanded = expanded, "search cancelled");
                return Err(SolveError::Cancelled {
                    nodes_expanded: expanded,
                });
            }
            expanded += 1;
            if let Some(budget) = self.config.max_nodes() {
                if expanded > budget {
                    debug!(budget, "search node budget exhausted");
                    return Err(SolveError::BudgetExhausted { budget });
                }
            }

            if is_goal(cell) {
                let path = reconstruct(&parent, index_of, start, cell);
                debug!(
                    nodes_expanded = expanded,
                    moves = path.move_count(),
                    "goal reached"
                );
                return Ok(Solution::new(path).with_stats(
                    SearchStats::new("BFS")
                        .with_nodes_expanded(expanded)
                        .with_elapsed(started.elapsed()),
                ));
            }

            for (_, next) in self.maze.open_neighbors(cell) {
                let slot = index_of(next);
                if !visited[slot] {
                    visited[slot] = true;
                    parent[slot] = cell;
                    queue.push_back(next);
                }
            }
        }

        debug!(nodes_expanded = expanded, "search exhausted without goal");
        Err(SolveError::NoPathExists { start })
    }
}

/// Walks the predecessor table back from the goal to the start.
fn reconstruct(
    parent: &[CellCoord],
    index_of: impl Fn(CellCoord) -> usize,
    start: CellCoord,
    goal: CellCoord,
) -> CellPath {
    let mut cells = vec![goal];
    let mut current = goal;
    while current != start {
        current = parent[index_of(current)];
        cells.push(current);
    }
    cells.reverse();
    CellPath::new(cells)
}

/// Convenience function for simple cell-to-cell queries with default
/// limits.
///
/// # Errors
///
/// As [`MazeBfs::solve`].
///
/// # Example
///
/// ```
/// use maze_grid::{CellCoord, MazeBuilder};
/// use solve_bfs::solve;
///
/// let maze = MazeBuilder::new(1, 1).build().unwrap();
/// let solution = solve(&maze, CellCoord::origin(), CellCoord::origin()).unwrap();
/// assert_eq!(solution.path().move_count(), 0);
/// ```
pub fn solve(maze: &Maze, start: CellCoord, goal: CellCoord) -> SolveResult<Solution> {
    MazeBfs::new(maze, BfsConfig::default()).solve(start, &SolveGoal::Cell(goal))
}
