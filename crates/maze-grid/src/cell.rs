//! Cell coordinates and cardinal directions.

use std::fmt;

/// A discrete 2D coordinate in maze space.
///
/// Rows and columns are 0-indexed. Row 0 is the northernmost row and rows
/// grow southward; column 0 is the westernmost column and columns grow
/// eastward. Coordinates are unsigned because a maze never extends past its
/// own origin.
///
/// # Example
///
/// ```
/// use maze_grid::CellCoord;
///
/// let coord = CellCoord::new(2, 3);
/// assert_eq!(coord.row, 2);
/// assert_eq!(coord.col, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    /// Row index (north-south axis, growing southward).
    pub row: u32,
    /// Column index (west-east axis, growing eastward).
    pub col: u32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use maze_grid::CellCoord;
    ///
    /// let coord = CellCoord::new(1, 2);
    /// assert_eq!(coord.as_tuple(), (1, 2));
    /// ```
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Creates the coordinate of the north-west corner cell (0, 0).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the coordinate as a `(row, col)` tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (u32, u32) {
        (self.row, self.col)
    }

    /// Returns the coordinate as a `[row, col]` array.
    ///
    /// This matches the `pos` field layout of the maze wire format.
    #[must_use]
    pub const fn as_array(self) -> [u32; 2] {
        [self.row, self.col]
    }

    /// Returns the coordinate one step in the given direction, or `None`
    /// if the step would leave the non-negative coordinate space.
    ///
    /// Bounds against a particular maze are checked by [`crate::Maze`],
    /// not here.
    ///
    /// # Example
    ///
    /// ```
    /// use maze_grid::{CellCoord, Direction};
    ///
    /// let coord = CellCoord::new(1, 1);
    /// assert_eq!(coord.step(Direction::North), Some(CellCoord::new(0, 1)));
    /// assert_eq!(coord.step(Direction::East), Some(CellCoord::new(1, 2)));
    ///
    /// // Stepping north out of row 0 has nowhere to go
    /// assert_eq!(CellCoord::new(0, 5).step(Direction::North), None);
    /// ```
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (row, col) = match direction {
            Direction::North => (self.row.checked_sub(1), Some(self.col)),
            Direction::East => (Some(self.row), self.col.checked_add(1)),
            Direction::South => (self.row.checked_add(1), Some(self.col)),
            Direction::West => (Some(self.row), self.col.checked_sub(1)),
        };
        match (row, col) {
            (Some(row), Some(col)) => Some(Self::new(row, col)),
            _ => None,
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cardinal direction on the maze grid.
///
/// The enum order is the fixed neighbor-visit order used by the search
/// engine (north, east, south, west), which makes traversal output
/// deterministic.
///
/// # Example
///
/// ```
/// use maze_grid::Direction;
///
/// assert_eq!(Direction::North.opposite(), Direction::South);
/// assert_eq!(Direction::East.delta(), (0, 1));
/// assert_eq!(Direction::ALL[0], Direction::North);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Toward row 0 (row - 1).
    North,
    /// Toward higher columns (col + 1).
    East,
    /// Toward higher rows (row + 1).
    South,
    /// Toward column 0 (col - 1).
    West,
}

impl Direction {
    /// All four directions in the deterministic tie-break order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Returns the `(row, col)` delta of one step in this direction.
    ///
    /// North is row-1, south is row+1, east is col+1, west is col-1.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }

    /// Returns the direction matching a single-step `(row, col)` delta,
    /// or `None` if the delta is not one cardinal step.
    ///
    /// # Example
    ///
    /// ```
    /// use maze_grid::Direction;
    ///
    /// assert_eq!(Direction::from_delta(-1, 0), Some(Direction::North));
    /// assert_eq!(Direction::from_delta(1, 1), None);
    /// assert_eq!(Direction::from_delta(0, 0), None);
    /// ```
    #[must_use]
    pub const fn from_delta(row_delta: i64, col_delta: i64) -> Option<Self> {
        match (row_delta, col_delta) {
            (-1, 0) => Some(Self::North),
            (0, 1) => Some(Self::East),
            (1, 0) => Some(Self::South),
            (0, -1) => Some(Self::West),
            _ => None,
        }
    }

    /// Returns the lowercase name used by the path wire format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
