//! JSON wire formats for the maze solver.
//!
//! This crate sits at the edges of the solving pipeline. On the way in
//! it parses maze documents produced by the maze parser, validating
//! record completeness and the boundary enclosure policy before the
//! grid layer checks structural consistency. On the way out it writes
//! the move documents the Route Planner consumes.
//!
//! # Overview
//!
//! - [`MazeLoader`] / [`load_maze`] / [`load_maze_file`]: maze documents
//! - [`write_moves`] / [`read_moves`] / [`write_moves_file`]: move documents
//! - [`JsonMazeProvider`] / [`JsonMoveWriter`]: file-backed seam adapters
//! - [`LoadError`]: everything that can go wrong at the boundary
//!
//! # Quick Start
//!
//! ```
//! use solve_io::load_maze;
//!
//! let doc = r#"{
//!   "width": 2,
//!   "height": 1,
//!   "blocks": [
//!     { "pos": [0, 0], "east": true, "north": false, "west": false, "south": false },
//!     { "pos": [0, 1], "east": false, "north": false, "west": true, "south": false }
//!   ]
//! }"#;
//!
//! let maze = load_maze(doc.as_bytes()).unwrap();
//! assert_eq!(maze.cell_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod maze_json;
mod moves_json;
mod seams;

pub use error::{LoadError, LoadResult};
pub use maze_json::{load_maze, load_maze_file, MazeLoader};
pub use moves_json::{read_moves, write_moves, write_moves_file};
pub use seams::{JsonMazeProvider, JsonMoveWriter};
