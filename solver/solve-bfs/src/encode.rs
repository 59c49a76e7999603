//! Block-wise move encoding.
//!
//! Turns a cell path into the ordered direction list the Route Planner
//! consumes. The adjacency check here is defensive: a non-adjacent pair
//! can only come from an unsound search engine, never from bad input,
//! so it is logged loudly and surfaced as an engine bug.

use maze_grid::{CellCoord, Direction};
use solve_types::{CellPath, MoveSequence, SolveError, SolveResult};
use tracing::error;

/// Derives the move directions of a path from consecutive cell deltas.
///
/// A single-cell path encodes to an empty move list.
///
/// # Errors
///
/// [`SolveError::NonAdjacentStep`] if any consecutive pair is not one
/// cardinal step apart.
///
/// # Example
///
/// ```
/// use maze_grid::{CellCoord, Direction};
/// use solve_bfs::encode_moves;
/// use solve_types::CellPath;
///
/// let path = CellPath::new(vec![
///     CellCoord::new(0, 0),
///     CellCoord::new(1, 0),
///     CellCoord::new(1, 1),
/// ]);
/// let moves = encode_moves(&path).unwrap();
/// assert_eq!(moves, vec![Direction::South, Direction::East]);
/// ```
pub fn encode_moves(path: &CellPath) -> SolveResult<Vec<Direction>> {
    let cells = path.cells();
    let mut moves = Vec::with_capacity(path.move_count());
    for (index, pair) in cells.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        match step_between(from, to) {
            Some(direction) => moves.push(direction),
            None => {
                error!(index, %from, %to, "search engine produced a non-adjacent step");
                return Err(SolveError::NonAdjacentStep { index, from, to });
            }
        }
    }
    Ok(moves)
}

/// Encodes a path as a [`MoveSequence`] anchored at its start cell.
///
/// # Errors
///
/// - [`SolveError::EmptyPath`] if the path holds no cells
/// - [`SolveError::NonAdjacentStep`] as for [`encode_moves`]
pub fn encode_path(path: &CellPath) -> SolveResult<MoveSequence> {
    let start = path.start().ok_or(SolveError::EmptyPath)?;
    Ok(MoveSequence::new(start, encode_moves(path)?))
}

/// Returns the direction of a single-step move, if it is one.
fn step_between(from: CellCoord, to: CellCoord) -> Option<Direction> {
    let row_delta = i64::from(to.row) - i64::from(from.row);
    let col_delta = i64::from(to.col) - i64::from(from.col);
    Direction::from_delta(row_delta, col_delta)
}
