//! Block-wise path types.

use maze_grid::{CellCoord, Direction};

/// An immutable ordered sequence of cells.
///
/// Adjacent entries are connected by a passable wall when the path comes
/// out of the search engine. A path of a single cell means start equals
/// goal (zero moves). Paths are never mutated once constructed.
///
/// # Example
///
/// ```
/// use maze_grid::CellCoord;
/// use solve_types::CellPath;
///
/// let path = CellPath::new(vec![
///     CellCoord::new(0, 0),
///     CellCoord::new(1, 0),
/// ]);
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.move_count(), 1);
/// assert_eq!(path.start(), Some(CellCoord::new(0, 0)));
/// assert_eq!(path.end(), Some(CellCoord::new(1, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPath {
    cells: Vec<CellCoord>,
}

impl CellPath {
    /// Creates a path from an ordered cell sequence.
    #[must_use]
    pub const fn new(cells: Vec<CellCoord>) -> Self {
        Self { cells }
    }

    /// Returns the cells in order.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Returns the number of cells in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the path holds no cells at all.
    ///
    /// Note that a *zero-move* path is not empty; it holds exactly the
    /// start cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of cell-to-cell moves (`len - 1`, or 0).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Returns the first cell, if any.
    #[must_use]
    pub fn start(&self) -> Option<CellCoord> {
        self.cells.first().copied()
    }

    /// Returns the last cell, if any.
    #[must_use]
    pub fn end(&self) -> Option<CellCoord> {
        self.cells.last().copied()
    }

    /// Returns an iterator over the cells.
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.iter().copied()
    }
}

impl From<Vec<CellCoord>> for CellPath {
    fn from(cells: Vec<CellCoord>) -> Self {
        Self::new(cells)
    }
}

/// A block-wise path expressed as a start cell plus move directions.
///
/// This is the shape the Route Planner consumes. It can be walked back
/// into the cell sequence it was derived from, which is how round-trips
/// are verified.
///
/// # Example
///
/// ```
/// use maze_grid::{CellCoord, Direction};
/// use solve_types::MoveSequence;
///
/// let seq = MoveSequence::new(
///     CellCoord::new(0, 0),
///     vec![Direction::South, Direction::East],
/// );
/// assert_eq!(seq.end(), Some(CellCoord::new(1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSequence {
    start: CellCoord,
    moves: Vec<Direction>,
}

impl MoveSequence {
    /// Creates a move sequence from a start cell and directions.
    #[must_use]
    pub const fn new(start: CellCoord, moves: Vec<Direction>) -> Self {
        Self { start, moves }
    }

    /// Returns the start cell.
    #[must_use]
    pub const fn start(&self) -> CellCoord {
        self.start
    }

    /// Returns the moves in order.
    #[must_use]
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    /// Returns the number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if the sequence has no moves (start equals goal).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Walks the moves from the start cell, returning every visited
    /// cell including the start.
    ///
    /// Returns `None` if a move steps out of the non-negative coordinate
    /// space, which means the sequence was not produced from a valid
    /// path.
    #[must_use]
    pub fn walk(&self) -> Option<CellPath> {
        let mut cells = Vec::with_capacity(self.moves.len() + 1);
        let mut current = self.start;
        cells.push(current);
        for &direction in &self.moves {
            current = current.step(direction)?;
            cells.push(current);
        }
        Some(CellPath::new(cells))
    }

    /// Returns the cell the sequence ends on, or `None` if a move steps
    /// out of the coordinate space.
    #[must_use]
    pub fn end(&self) -> Option<CellCoord> {
        self.walk().and_then(|path| path.end())
    }
}
