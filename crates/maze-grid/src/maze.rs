//! The read-only maze grid and its builder.

use crate::cell::{CellCoord, Direction};
use crate::error::{GridError, GridResult, WallConflict};
use crate::walls::Walls;

/// A rectangular maze of cells with validated wall flags.
///
/// The grid is stored as a dense row-major array of [`Walls`] masks for
/// cache locality and O(1) cell lookup. A `Maze` is constructed once and
/// read-only thereafter, so independent searches may share a reference
/// without locking.
///
/// # Example
///
/// ```
/// use maze_grid::{CellCoord, Direction, MazeBuilder};
///
/// let maze = MazeBuilder::new(3, 3)
///     .open(CellCoord::new(0, 0), Direction::South)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let neighbors: Vec<_> = maze.open_neighbors(CellCoord::new(0, 0)).collect();
/// assert_eq!(neighbors, vec![(Direction::South, CellCoord::new(1, 0))]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: u32,
    height: u32,
    cells: Vec<Walls>,
}

impl Maze {
    /// Creates a maze from a row-major cell buffer.
    ///
    /// Validates that the dimensions are non-zero, that the buffer holds
    /// exactly `width * height` cells, and that every pair of adjacent
    /// cells agrees about their shared wall.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if either dimension is zero
    /// - [`GridError::CellCountMismatch`] if the buffer length is wrong
    /// - [`GridError::InconsistentWalls`] listing **every** disagreeing
    ///   shared wall
    pub fn new(width: u32, height: u32, cells: Vec<Walls>) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                width,
                height,
                expected,
                got: cells.len(),
            });
        }

        let maze = Self {
            width,
            height,
            cells,
        };
        let conflicts = maze.wall_conflicts();
        if conflicts.is_empty() {
            Ok(maze)
        } else {
            Err(GridError::InconsistentWalls(conflicts))
        }
    }

    /// Returns the maze width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the maze height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the total number of cells (`width * height`).
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the coordinate lies inside the maze bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use maze_grid::{CellCoord, MazeBuilder};
    ///
    /// let maze = MazeBuilder::new(2, 2).build().unwrap();
    /// assert!(maze.contains(CellCoord::new(1, 1)));
    /// assert!(!maze.contains(CellCoord::new(2, 0)));
    /// ```
    #[must_use]
    pub const fn contains(&self, coord: CellCoord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Returns the row-major index of an in-bounds coordinate.
    ///
    /// The coordinate must already be bounds-checked.
    pub(crate) const fn index_of(&self, coord: CellCoord) -> usize {
        coord.row as usize * self.width as usize + coord.col as usize
    }

    /// Returns the wall mask of the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if the coordinate falls outside
    /// `[0, width) x [0, height)`.
    pub fn walls(&self, coord: CellCoord) -> GridResult<Walls> {
        if self.contains(coord) {
            Ok(self.cells[self.index_of(coord)])
        } else {
            Err(GridError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns whether the wall of `coord` toward `direction` is an
    /// opening.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if the coordinate is outside the maze.
    pub fn is_open(&self, coord: CellCoord, direction: Direction) -> GridResult<bool> {
        Ok(self.walls(coord)?.is_open(direction))
    }

    /// Returns the reachable neighbors of a cell in tie-break order
    /// (north, east, south, west).
    ///
    /// A neighbor is reachable iff the wall toward it is an opening and
    /// the neighbor coordinate is in bounds. An out-of-bounds `coord`
    /// yields an empty iterator.
    pub fn open_neighbors(
        &self,
        coord: CellCoord,
    ) -> impl Iterator<Item = (Direction, CellCoord)> + '_ {
        let walls = self.walls(coord).unwrap_or_default();
        Direction::ALL.into_iter().filter_map(move |direction| {
            if !walls.is_open(direction) {
                return None;
            }
            let next = coord.step(direction)?;
            self.contains(next).then_some((direction, next))
        })
    }

    /// Returns every perimeter wall that is an opening, as
    /// `(cell, direction)` pairs in row-major order.
    ///
    /// An enclosed maze returns an empty list; openings here mean the
    /// maze has an external exit.
    #[must_use]
    pub fn boundary_openings(&self) -> Vec<(CellCoord, Direction)> {
        let mut openings = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let coord = CellCoord::new(row, col);
                let walls = self.cells[self.index_of(coord)];
                for direction in Direction::ALL {
                    if !walls.is_open(direction) {
                        continue;
                    }
                    let outside = match coord.step(direction) {
                        Some(next) => !self.contains(next),
                        None => true,
                    };
                    if outside {
                        openings.push((coord, direction));
                    }
                }
            }
        }
        openings
    }

    /// Collects every disagreeing shared wall in the grid.
    ///
    /// Checking east and south edges of every cell covers each shared
    /// wall exactly once.
    fn wall_conflicts(&self) -> Vec<WallConflict> {
        let mut conflicts = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let coord = CellCoord::new(row, col);
                let walls = self.cells[self.index_of(coord)];
                for direction in [Direction::East, Direction::South] {
                    let Some(next) = coord.step(direction) else {
                        continue;
                    };
                    if !self.contains(next) {
                        continue;
                    }
                    let a_open = walls.is_open(direction);
                    let b_open = self.cells[self.index_of(next)].is_open(direction.opposite());
                    if a_open != b_open {
                        conflicts.push(WallConflict {
                            a: coord,
                            b: next,
                            direction,
                            a_open,
                            b_open,
                        });
                    }
                }
            }
        }
        conflicts
    }
}

/// Builder that carves openings while keeping shared walls in sync.
///
/// Opening a wall through [`MazeBuilder::open`] sets the flag on both
/// sides of the shared edge, so the built maze always satisfies the
/// wall-agreement invariant by construction.
///
/// # Example
///
/// ```
/// use maze_grid::{CellCoord, Direction, MazeBuilder};
///
/// let maze = MazeBuilder::new(2, 1)
///     .open(CellCoord::new(0, 0), Direction::East)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert!(maze.is_open(CellCoord::new(0, 1), Direction::West).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct MazeBuilder {
    width: u32,
    height: u32,
    cells: Vec<Walls>,
}

impl MazeBuilder {
    /// Creates a builder for a fully closed `width x height` maze.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Walls::empty(); width as usize * height as usize],
        }
    }

    /// Opens the wall of `coord` toward `direction`, and the matching
    /// wall of the neighbor if one is in bounds.
    ///
    /// Opening a perimeter wall creates an external exit; [`Maze`] itself
    /// permits this, enclosure policy belongs to the loader.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if `coord` is outside the maze.
    pub fn open(mut self, coord: CellCoord, direction: Direction) -> GridResult<Self> {
        if coord.row >= self.height || coord.col >= self.width {
            return Err(GridError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        let index = coord.row as usize * self.width as usize + coord.col as usize;
        self.cells[index] = self.cells[index].with_open(direction);

        if let Some(next) = coord.step(direction) {
            if next.row < self.height && next.col < self.width {
                let next_index = next.row as usize * self.width as usize + next.col as usize;
                self.cells[next_index] = self.cells[next_index].with_open(direction.opposite());
            }
        }
        Ok(self)
    }

    /// Builds the maze.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyGrid`] if either dimension is zero. Wall
    /// agreement holds by construction.
    pub fn build(self) -> GridResult<Maze> {
        Maze::new(self.width, self.height, self.cells)
    }
}
