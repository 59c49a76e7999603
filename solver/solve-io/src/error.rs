//! Error types for maze and path wire formats.

use maze_grid::{CellCoord, Direction, GridError};

/// Result type for wire-format operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while reading or writing solver wire formats.
///
/// Input errors carry the offending coordinates so the producer of the
/// maze document can fix its data; structural errors propagate the full
/// conflict list from the grid layer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The document is not valid JSON or a record has missing or
    /// wrong-typed fields.
    #[error("malformed maze document: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// A block record names a coordinate outside the declared bounds.
    #[error("block {coord} outside declared {width}x{height} maze")]
    CellOutOfBounds {
        /// The offending coordinate.
        coord: CellCoord,
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },

    /// A coordinate appears in more than one block record.
    #[error("duplicate block record for cell {0}")]
    DuplicateCell(CellCoord),

    /// One or more in-bounds coordinates have no block record.
    #[error("{missing} cell(s) without a block record, first: {first}")]
    MissingCell {
        /// How many cells have no record.
        missing: u64,
        /// The first uncovered cell in row-major order.
        first: CellCoord,
    },

    /// The maze was declared enclosed but its perimeter has openings.
    ///
    /// Every opening is listed as a `(cell, direction)` pair.
    #[error("maze boundary has {} opening(s){}", .0.len(), first_opening(.0))]
    OpenBoundary(Vec<(CellCoord, Direction)>),

    /// The assembled grid failed structural validation.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// File-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn first_opening(openings: &[(CellCoord, Direction)]) -> String {
    openings
        .first()
        .map_or_else(String::new, |(cell, direction)| {
            format!(", first: {cell} toward {direction}")
        })
}

impl LoadError {
    /// Returns `true` if this error reports disagreeing shared walls.
    #[must_use]
    pub const fn is_inconsistent_walls(&self) -> bool {
        matches!(self, Self::Grid(GridError::InconsistentWalls(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_out_of_bounds_display() {
        let error = LoadError::CellOutOfBounds {
            coord: CellCoord::new(5, 0),
            width: 3,
            height: 3,
        };
        let msg = error.to_string();
        assert!(msg.contains("(5, 0)"));
        assert!(msg.contains("3x3"));
    }

    #[test]
    fn test_duplicate_cell_display() {
        let error = LoadError::DuplicateCell(CellCoord::new(1, 2));
        assert!(error.to_string().contains("(1, 2)"));
    }

    #[test]
    fn test_missing_cell_display_lists_count() {
        let error = LoadError::MissingCell {
            missing: 2,
            first: CellCoord::new(0, 1),
        };
        let msg = error.to_string();
        assert!(msg.contains("2 cell(s)"));
        assert!(msg.contains("(0, 1)"));
    }

    #[test]
    fn test_open_boundary_display() {
        let error = LoadError::OpenBoundary(vec![(CellCoord::new(0, 0), Direction::North)]);
        let msg = error.to_string();
        assert!(msg.contains("(0, 0)"));
        assert!(msg.contains("north"));
    }

    #[test]
    fn test_open_boundary_display_empty_list() {
        let error = LoadError::OpenBoundary(Vec::new());
        assert_eq!(error.to_string(), "maze boundary has 0 opening(s)");
    }

    #[test]
    fn test_grid_error_passthrough() {
        let error = LoadError::from(GridError::EmptyGrid {
            width: 0,
            height: 0,
        });
        assert!(error.to_string().contains("non-zero"));
        assert!(!error.is_inconsistent_walls());
    }
}
