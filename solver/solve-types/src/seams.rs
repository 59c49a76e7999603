//! Seams toward collaborators that do not exist at compile time.
//!
//! The Explorer (or Parser) that produces mazes and the Route Planner
//! that consumes moves are external processes. These traits model their
//! contracts so the solver core never depends on a concrete transport;
//! the io crate supplies JSON-backed implementations and tests supply
//! in-memory ones.

use maze_grid::Maze;

use crate::path::MoveSequence;

/// A source of maze models, typically backed by the Maze Parser or the
/// Maze Explorer.
pub trait MazeProvider {
    /// The provider's failure type.
    type Error;

    /// Produces the next maze to solve.
    ///
    /// # Errors
    ///
    /// Provider-specific; a JSON-backed provider fails on malformed or
    /// inconsistent maze documents.
    fn provide(&mut self) -> Result<Maze, Self::Error>;
}

/// A sink for solved move sequences, typically backed by the Route
/// Planner.
pub trait MoveConsumer {
    /// The consumer's failure type.
    type Error;

    /// Accepts a block-wise path.
    ///
    /// # Errors
    ///
    /// Consumer-specific; a JSON-backed consumer fails if the sequence
    /// cannot be serialized or delivered.
    fn consume(&mut self, moves: &MoveSequence) -> Result<(), Self::Error>;
}
