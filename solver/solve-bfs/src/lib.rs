//! Breadth-first maze solving.
//!
//! This crate is the search core of the maze solver: given a validated
//! [`maze_grid::Maze`], a start cell, and a goal specification, it
//! computes a provably shortest block-wise path and encodes it as move
//! directions for the Route Planner.
//!
//! # Overview
//!
//! - [`MazeBfs`]: breadth-first engine with per-query limits
//!   (node budget, cooperative cancellation)
//! - [`solve`]: convenience function for plain cell-to-cell queries
//! - [`encode_moves`] / [`encode_path`]: derive move directions from
//!   consecutive cell deltas
//!
//! # Quick Start
//!
//! ```
//! use maze_grid::{CellCoord, Direction, MazeBuilder};
//! use solve_bfs::{encode_path, solve};
//!
//! let maze = MazeBuilder::new(2, 2)
//!     .open(CellCoord::new(0, 0), Direction::South)
//!     .unwrap()
//!     .open(CellCoord::new(1, 0), Direction::East)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let solution = solve(&maze, CellCoord::new(0, 0), CellCoord::new(1, 1)).unwrap();
//! let seq = encode_path(solution.path()).unwrap();
//! assert_eq!(seq.moves(), &[Direction::South, Direction::East]);
//! ```
//!
//! # Guarantees
//!
//! All moves cost the same, so breadth-first order makes the first goal
//! cell dequeued end an optimal path; with a multi-cell goal the
//! *nearest* member wins with no re-scan. Neighbor visits follow the
//! fixed order north, east, south, west, so repeated queries return
//! byte-identical paths. The loop is bounded by the maze's cell count
//! and therefore terminates on disconnected or partially explored
//! mazes, reporting `NoPathExists` instead of spinning.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bfs;
mod encode;

pub use bfs::{solve, MazeBfs};
pub use encode::{encode_moves, encode_path};
