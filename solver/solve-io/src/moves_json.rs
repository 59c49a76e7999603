//! JSON move documents.
//!
//! A move document anchors an ordered direction list at its start cell:
//!
//! ```json
//! { "start": [0, 0], "moves": ["south", "south", "east", "east"] }
//! ```
//!
//! This is the hand-off format between the solver and the Route
//! Planner, so the writer keeps it minimal: no path cells, no search
//! statistics.

use std::path::Path;

use maze_grid::{CellCoord, Direction};
use serde::{Deserialize, Serialize};
use solve_types::MoveSequence;
use tracing::debug;

use crate::error::LoadResult;

/// Wire form of a [`MoveSequence`].
#[derive(Debug, Serialize, Deserialize)]
struct MovesDoc {
    /// `[row, col]` start cell.
    start: [u32; 2],
    /// Ordered moves from the start cell.
    moves: Vec<Direction>,
}

impl From<&MoveSequence> for MovesDoc {
    fn from(seq: &MoveSequence) -> Self {
        Self {
            start: seq.start().as_array(),
            moves: seq.moves().to_vec(),
        }
    }
}

impl From<MovesDoc> for MoveSequence {
    fn from(doc: MovesDoc) -> Self {
        Self::new(CellCoord::new(doc.start[0], doc.start[1]), doc.moves)
    }
}

/// Serializes a move sequence as a JSON document.
///
/// # Errors
///
/// [`crate::LoadError::MalformedRecord`] if serialization fails.
///
/// # Example
///
/// ```
/// use maze_grid::{CellCoord, Direction};
/// use solve_io::write_moves;
/// use solve_types::MoveSequence;
///
/// let seq = MoveSequence::new(CellCoord::new(0, 0), vec![Direction::South]);
/// let json = write_moves(&seq).unwrap();
/// assert!(json.contains("\"south\""));
/// ```
pub fn write_moves(seq: &MoveSequence) -> LoadResult<String> {
    let json = serde_json::to_string(&MovesDoc::from(seq))?;
    debug!(moves = seq.len(), "encoded move document");
    Ok(json)
}

/// Parses a move sequence from a JSON document.
///
/// # Errors
///
/// [`crate::LoadError::MalformedRecord`] if the bytes are not a valid
/// document.
pub fn read_moves(bytes: &[u8]) -> LoadResult<MoveSequence> {
    let doc: MovesDoc = serde_json::from_slice(bytes)?;
    Ok(doc.into())
}

/// Writes a move sequence to a JSON file.
///
/// # Errors
///
/// As for [`write_moves`], plus [`crate::LoadError::Io`] on write
/// failure.
pub fn write_moves_file(seq: &MoveSequence, path: impl AsRef<Path>) -> LoadResult<()> {
    let json = write_moves(seq)?;
    std::fs::write(path, json)?;
    Ok(())
}
