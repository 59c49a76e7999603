//! Domain types for the maze solver.
//!
//! This crate defines the vocabulary shared by the search engine, the
//! loader, and the Manager that sequences them:
//!
//! - [`SolveGoal`]: what the search is aiming for (one cell or any of a
//!   frontier set)
//! - [`CellPath`] / [`MoveSequence`]: the block-wise result, as cells or
//!   as directions
//! - [`BfsConfig`] / [`CancelToken`]: per-query search limits and
//!   cooperative cancellation
//! - [`SearchStats`] / [`Solution`]: what a completed search reports
//! - [`SolveError`]: search outcomes and engine invariant violations
//! - [`MazeProvider`] / [`MoveConsumer`]: the seams toward the Explorer
//!   and the Route Planner, which do not exist at compile time here
//!
//! # Example
//!
//! ```
//! use maze_grid::CellCoord;
//! use solve_types::{BfsConfig, SolveGoal};
//!
//! let goal = SolveGoal::cell(2, 2);
//! assert!(goal.matches(CellCoord::new(2, 2)));
//!
//! let config = BfsConfig::default().with_max_nodes(10_000);
//! assert_eq!(config.max_nodes(), Some(10_000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod error;
mod goal;
mod path;
mod seams;
mod solution;
mod stats;

pub use config::{BfsConfig, CancelToken};
pub use error::{SolveError, SolveResult};
pub use goal::SolveGoal;
pub use path::{CellPath, MoveSequence};
pub use seams::{MazeProvider, MoveConsumer};
pub use solution::Solution;
pub use stats::SearchStats;
