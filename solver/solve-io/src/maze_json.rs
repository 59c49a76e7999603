//! JSON maze documents.
//!
//! A maze document declares its dimensions and one block record per
//! cell, each carrying a `[row, col]` position and four passability
//! flags (`true` means open):
//!
//! ```json
//! {
//!   "width": 2,
//!   "height": 1,
//!   "blocks": [
//!     { "pos": [0, 0], "east": true, "north": false, "west": false, "south": false },
//!     { "pos": [0, 1], "east": false, "north": false, "west": true, "south": false }
//!   ]
//! }
//! ```
//!
//! Block order is irrelevant; the loader rejects documents with
//! duplicate, missing, or out-of-bounds records and hands the assembled
//! wall grid to [`maze_grid::Maze`] for structural validation.

use std::collections::HashMap;
use std::path::Path;

use maze_grid::{CellCoord, Maze, Walls};
use serde::Deserialize;
use tracing::debug;

use crate::error::{LoadError, LoadResult};

/// One cell record of a maze document.
#[derive(Debug, Clone, Copy, Deserialize)]
struct BlockDoc {
    /// `[row, col]` position of the cell.
    pos: [u32; 2],
    north: bool,
    east: bool,
    south: bool,
    west: bool,
}

/// Top-level maze document.
#[derive(Debug, Deserialize)]
struct MazeDoc {
    width: u32,
    height: u32,
    blocks: Vec<BlockDoc>,
}

/// Configurable maze document loader.
///
/// By default the loader enforces the enclosure policy: every wall on
/// the maze perimeter must be closed. Maze generators that model exits
/// as boundary openings can relax this with
/// [`with_enclosure_required`](Self::with_enclosure_required).
///
/// # Example
///
/// ```
/// use solve_io::MazeLoader;
///
/// let doc = r#"{
///   "width": 1,
///   "height": 1,
///   "blocks": [
///     { "pos": [0, 0], "east": false, "north": false, "west": false, "south": false }
///   ]
/// }"#;
///
/// let maze = MazeLoader::new().load(doc.as_bytes()).unwrap();
/// assert_eq!(maze.cell_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MazeLoader {
    enclosure_required: bool,
}

impl Default for MazeLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeLoader {
    /// Creates a loader with the enclosure policy enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enclosure_required: true,
        }
    }

    /// Sets whether perimeter walls must be closed.
    #[must_use]
    pub const fn with_enclosure_required(mut self, required: bool) -> Self {
        self.enclosure_required = required;
        self
    }

    /// Returns whether perimeter walls must be closed.
    #[must_use]
    pub const fn enclosure_required(&self) -> bool {
        self.enclosure_required
    }

    /// Parses and validates a maze document.
    ///
    /// # Errors
    ///
    /// - [`LoadError::MalformedRecord`] if the bytes are not a valid document
    /// - [`LoadError::CellOutOfBounds`] if a block lies outside the declared bounds
    /// - [`LoadError::DuplicateCell`] if a coordinate has two block records
    /// - [`LoadError::MissingCell`] if any in-bounds coordinate has no record
    /// - [`LoadError::OpenBoundary`] if the enclosure policy is violated
    /// - [`LoadError::Grid`] if the assembled grid fails structural validation
    pub fn load(&self, bytes: &[u8]) -> LoadResult<Maze> {
        let doc: MazeDoc = serde_json::from_slice(bytes)?;
        let maze = Self::assemble(&doc)?;

        if self.enclosure_required {
            let openings = maze.boundary_openings();
            if !openings.is_empty() {
                return Err(LoadError::OpenBoundary(openings));
            }
        }

        debug!(
            width = maze.width(),
            height = maze.height(),
            "loaded maze document"
        );
        Ok(maze)
    }

    /// Places each block record, then lays the grid out row-major.
    ///
    /// Every allocation here is sized by the record count actually
    /// received, never by the declared `width * height`, so a tiny
    /// document cannot declare its way into a huge grid.
    fn assemble(doc: &MazeDoc) -> LoadResult<Maze> {
        let expected = u64::from(doc.width) * u64::from(doc.height);
        let mut slots: HashMap<CellCoord, Walls> = HashMap::with_capacity(doc.blocks.len());

        for block in &doc.blocks {
            let coord = CellCoord::new(block.pos[0], block.pos[1]);
            if coord.row >= doc.height || coord.col >= doc.width {
                return Err(LoadError::CellOutOfBounds {
                    coord,
                    width: doc.width,
                    height: doc.height,
                });
            }
            let walls =
                Walls::from_openings(block.north, block.east, block.south, block.west);
            if slots.insert(coord, walls).is_some() {
                return Err(LoadError::DuplicateCell(coord));
            }
        }

        // The records are distinct and in bounds here, so a shortfall
        // means uncovered cells. Among the first `len + 1` cells in
        // row-major order at least one must be uncovered, which bounds
        // the scan for the first gap.
        if (slots.len() as u64) < expected {
            let first = row_major(doc.width, doc.height)
                .take(slots.len() + 1)
                .find(|coord| !slots.contains_key(coord))
                .unwrap_or_default();
            return Err(LoadError::MissingCell {
                missing: expected - slots.len() as u64,
                first,
            });
        }

        let cells: Vec<Walls> = row_major(doc.width, doc.height)
            .map(|coord| slots.get(&coord).copied().unwrap_or_default())
            .collect();
        Ok(Maze::new(doc.width, doc.height, cells)?)
    }
}

/// Iterates every cell coordinate of a `width x height` grid in
/// row-major order.
fn row_major(width: u32, height: u32) -> impl Iterator<Item = CellCoord> {
    (0..height).flat_map(move |row| (0..width).map(move |col| CellCoord::new(row, col)))
}

/// Loads a maze document with the default enclosure policy.
///
/// # Errors
///
/// As for [`MazeLoader::load`].
pub fn load_maze(bytes: &[u8]) -> LoadResult<Maze> {
    MazeLoader::new().load(bytes)
}

/// Loads a maze document from a file with the default enclosure policy.
///
/// # Errors
///
/// As for [`MazeLoader::load`], plus [`LoadError::Io`] on read failure.
pub fn load_maze_file(path: impl AsRef<Path>) -> LoadResult<Maze> {
    let bytes = std::fs::read(path)?;
    load_maze(&bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maze_grid::{Direction, GridError};

    /// The 3x3 maze from the parser documentation, as a document.
    const DOC_MAZE: &str = r#"{
        "width": 3,
        "height": 3,
        "blocks": [
            { "pos": [0,0], "east": true,  "north": false, "west": false, "south": true },
            { "pos": [0,1], "east": false, "north": false, "west": true,  "south": false },
            { "pos": [0,2], "east": false, "north": false, "west": false, "south": true },
            { "pos": [1,0], "east": false, "north": true,  "west": false, "south": true },
            { "pos": [1,1], "east": true,  "north": false, "west": false, "south": true },
            { "pos": [1,2], "east": false, "north": true,  "west": true,  "south": false },
            { "pos": [2,0], "east": true,  "north": true,  "west": false, "south": false },
            { "pos": [2,1], "east": true,  "north": true,  "west": true,  "south": false },
            { "pos": [2,2], "east": false, "north": false, "west": true,  "south": false }
        ]
    }"#;

    #[test]
    fn test_load_doc_maze() {
        let maze = load_maze(DOC_MAZE.as_bytes()).unwrap();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.height(), 3);
        assert!(maze
            .is_open(CellCoord::new(0, 0), Direction::East)
            .unwrap());
        assert!(!maze
            .is_open(CellCoord::new(0, 1), Direction::East)
            .unwrap());
    }

    #[test]
    fn test_load_accepts_any_block_order() {
        let doc = r#"{
            "width": 2, "height": 1,
            "blocks": [
                { "pos": [0,1], "east": false, "north": false, "west": true,  "south": false },
                { "pos": [0,0], "east": true,  "north": false, "west": false, "south": false }
            ]
        }"#;
        let maze = load_maze(doc.as_bytes()).unwrap();
        assert!(maze
            .is_open(CellCoord::new(0, 0), Direction::East)
            .unwrap());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        assert!(matches!(
            load_maze(b"{ not json"),
            Err(LoadError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_load_rejects_missing_field() {
        let doc = r#"{
            "width": 1, "height": 1,
            "blocks": [ { "pos": [0,0], "east": false, "north": false, "west": false } ]
        }"#;
        assert!(matches!(
            load_maze(doc.as_bytes()),
            Err(LoadError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_load_rejects_out_of_bounds_block() {
        let doc = r#"{
            "width": 1, "height": 1,
            "blocks": [
                { "pos": [0,0], "east": false, "north": false, "west": false, "south": false },
                { "pos": [0,5], "east": false, "north": false, "west": false, "south": false }
            ]
        }"#;
        assert!(matches!(
            load_maze(doc.as_bytes()),
            Err(LoadError::CellOutOfBounds {
                coord: CellCoord { row: 0, col: 5 },
                width: 1,
                height: 1,
            })
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_block() {
        let doc = r#"{
            "width": 2, "height": 1,
            "blocks": [
                { "pos": [0,0], "east": true,  "north": false, "west": false, "south": false },
                { "pos": [0,0], "east": true,  "north": false, "west": false, "south": false },
                { "pos": [0,1], "east": false, "north": false, "west": true,  "south": false }
            ]
        }"#;
        assert!(matches!(
            load_maze(doc.as_bytes()),
            Err(LoadError::DuplicateCell(CellCoord { row: 0, col: 0 }))
        ));
    }

    #[test]
    fn test_load_reports_missing_cells() {
        let doc = r#"{
            "width": 2, "height": 2,
            "blocks": [
                { "pos": [0,0], "east": false, "north": false, "west": false, "south": false }
            ]
        }"#;
        let Err(LoadError::MissingCell { missing, first }) = load_maze(doc.as_bytes()) else {
            panic!("expected MissingCell");
        };
        assert_eq!(missing, 3);
        assert_eq!(first, CellCoord::new(0, 1));
    }

    #[test]
    fn test_load_missing_first_skips_covered_cells() {
        let doc = r#"{
            "width": 2, "height": 2,
            "blocks": [
                { "pos": [0,0], "east": false, "north": false, "west": false, "south": false },
                { "pos": [0,1], "east": false, "north": false, "west": false, "south": false },
                { "pos": [1,0], "east": false, "north": false, "west": false, "south": false }
            ]
        }"#;
        let Err(LoadError::MissingCell { missing, first }) = load_maze(doc.as_bytes()) else {
            panic!("expected MissingCell");
        };
        assert_eq!(missing, 1);
        assert_eq!(first, CellCoord::new(1, 1));
    }

    #[test]
    fn test_load_huge_declared_dimensions_stay_cheap() {
        // A short document may declare any dimensions it likes; the
        // loader must answer from the records it actually received
        // instead of sizing storage to the declared area.
        let doc = r#"{ "width": 4000000000, "height": 4000000000, "blocks": [] }"#;
        let Err(LoadError::MissingCell { missing, first }) = load_maze(doc.as_bytes()) else {
            panic!("expected MissingCell");
        };
        assert_eq!(missing, 16_000_000_000_000_000_000);
        assert_eq!(first, CellCoord::origin());
    }

    #[test]
    fn test_load_rejects_open_boundary_by_default() {
        let doc = r#"{
            "width": 1, "height": 1,
            "blocks": [
                { "pos": [0,0], "east": false, "north": true, "west": false, "south": false }
            ]
        }"#;
        let Err(LoadError::OpenBoundary(openings)) = load_maze(doc.as_bytes()) else {
            panic!("expected OpenBoundary");
        };
        assert_eq!(openings, vec![(CellCoord::new(0, 0), Direction::North)]);
    }

    #[test]
    fn test_load_allows_open_boundary_when_relaxed() {
        let doc = r#"{
            "width": 1, "height": 1,
            "blocks": [
                { "pos": [0,0], "east": false, "north": true, "west": false, "south": false }
            ]
        }"#;
        let maze = MazeLoader::new()
            .with_enclosure_required(false)
            .load(doc.as_bytes())
            .unwrap();
        assert!(maze
            .is_open(CellCoord::new(0, 0), Direction::North)
            .unwrap());
    }

    #[test]
    fn test_load_surfaces_disagreeing_shared_walls() {
        // (0,0) says its east side is open; (0,1) says its west side is
        // closed.
        let doc = r#"{
            "width": 2, "height": 1,
            "blocks": [
                { "pos": [0,0], "east": true,  "north": false, "west": false, "south": false },
                { "pos": [0,1], "east": false, "north": false, "west": false, "south": false }
            ]
        }"#;
        let result = load_maze(doc.as_bytes());
        assert!(matches!(
            result,
            Err(LoadError::Grid(GridError::InconsistentWalls(_)))
        ));
        assert!(result.unwrap_err().is_inconsistent_walls());
    }

    #[test]
    fn test_load_rejects_zero_dimensions() {
        let doc = r#"{ "width": 0, "height": 0, "blocks": [] }"#;
        assert!(matches!(
            load_maze(doc.as_bytes()),
            Err(LoadError::Grid(GridError::EmptyGrid { .. }))
        ));
    }

    #[test]
    fn test_load_maze_file_reports_io_error() {
        let result = load_maze_file("/nonexistent/maze.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
