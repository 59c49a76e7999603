//! Dense wall-grid maze model.
//!
//! This crate provides the in-memory representation of a rectangular maze:
//! a grid of cells, each carrying four directional wall flags, where a set
//! flag means the wall is an *opening* a bot can cross.
//!
//! # Overview
//!
//! - [`CellCoord`]: a (row, column) coordinate, 0-indexed, rows growing
//!   southward and columns growing eastward
//! - [`Direction`]: the four cardinal directions with a fixed iteration
//!   order used for deterministic traversal
//! - [`Walls`]: a 4-bit passability mask for one cell
//! - [`Maze`]: the read-only grid, validated on construction
//! - [`MazeBuilder`]: carves openings while keeping shared walls in sync
//!
//! # Quick Start
//!
//! ```
//! use maze_grid::{CellCoord, Direction, MazeBuilder};
//!
//! // A 2x2 maze with a single opening between (0,0) and (0,1)
//! let maze = MazeBuilder::new(2, 2)
//!     .open(CellCoord::new(0, 0), Direction::East)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert!(maze.is_open(CellCoord::new(0, 0), Direction::East).unwrap());
//! assert!(maze.is_open(CellCoord::new(0, 1), Direction::West).unwrap());
//! ```
//!
//! # Structural invariant
//!
//! For every pair of adjacent cells, the wall flag on each side of the
//! shared edge must agree. [`Maze::new`] checks the whole grid and reports
//! **every** disagreeing edge via [`GridError::InconsistentWalls`], so a
//! maze producer can fix all of them in one pass.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cell;
mod error;
mod maze;
mod walls;

pub use cell::{CellCoord, Direction};
pub use error::{GridError, GridResult, WallConflict};
pub use maze::{Maze, MazeBuilder};
pub use walls::Walls;
