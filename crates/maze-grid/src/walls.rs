//! Per-cell wall passability flags.

use bitflags::bitflags;

use crate::cell::Direction;

bitflags! {
    /// Passability mask for the four walls of one cell.
    ///
    /// A set bit means the wall in that direction is an *opening* (a bot
    /// can cross it); a cleared bit means the wall is solid. The default
    /// value is fully closed.
    ///
    /// # Example
    ///
    /// ```
    /// use maze_grid::{Direction, Walls};
    ///
    /// let walls = Walls::NORTH | Walls::EAST;
    /// assert!(walls.is_open(Direction::North));
    /// assert!(!walls.is_open(Direction::South));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Walls: u8 {
        /// The north wall is an opening.
        const NORTH = 1;
        /// The east wall is an opening.
        const EAST = 1 << 1;
        /// The south wall is an opening.
        const SOUTH = 1 << 2;
        /// The west wall is an opening.
        const WEST = 1 << 3;
    }
}

impl Walls {
    /// Returns the flag bit for the given direction.
    #[must_use]
    pub const fn bit(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::NORTH,
            Direction::East => Self::EAST,
            Direction::South => Self::SOUTH,
            Direction::West => Self::WEST,
        }
    }

    /// Builds a mask from four per-direction openness flags.
    ///
    /// This matches the field order of the maze wire format's block
    /// records.
    ///
    /// # Example
    ///
    /// ```
    /// use maze_grid::{Direction, Walls};
    ///
    /// let walls = Walls::from_openings(false, true, true, false);
    /// assert!(!walls.is_open(Direction::North));
    /// assert!(walls.is_open(Direction::East));
    /// assert!(walls.is_open(Direction::South));
    /// assert!(!walls.is_open(Direction::West));
    /// ```
    #[must_use]
    pub fn from_openings(north: bool, east: bool, south: bool, west: bool) -> Self {
        let mut walls = Self::empty();
        for (open, bit) in [
            (north, Self::NORTH),
            (east, Self::EAST),
            (south, Self::SOUTH),
            (west, Self::WEST),
        ] {
            if open {
                walls |= bit;
            }
        }
        walls
    }

    /// Returns `true` if the wall in the given direction is an opening.
    #[must_use]
    pub fn is_open(self, direction: Direction) -> bool {
        self.contains(Self::bit(direction))
    }

    /// Returns a copy with the wall in the given direction opened.
    #[must_use]
    pub fn with_open(self, direction: Direction) -> Self {
        self | Self::bit(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fully_closed() {
        let walls = Walls::default();
        for direction in Direction::ALL {
            assert!(!walls.is_open(direction));
        }
    }

    #[test]
    fn test_bit_per_direction_is_distinct() {
        let bits: Vec<_> = Direction::ALL.map(Walls::bit).to_vec();
        for (i, a) in bits.iter().enumerate() {
            for b in &bits[i + 1..] {
                assert!((*a & *b).is_empty());
            }
        }
    }

    #[test]
    fn test_from_openings() {
        let walls = Walls::from_openings(true, false, false, true);
        assert!(walls.is_open(Direction::North));
        assert!(!walls.is_open(Direction::East));
        assert!(!walls.is_open(Direction::South));
        assert!(walls.is_open(Direction::West));
    }

    #[test]
    fn test_from_openings_all_true() {
        assert_eq!(Walls::from_openings(true, true, true, true), Walls::all());
    }

    #[test]
    fn test_with_open() {
        let walls = Walls::empty().with_open(Direction::South);
        assert!(walls.is_open(Direction::South));
        assert!(!walls.is_open(Direction::North));

        // Re-opening an open wall is a no-op
        assert_eq!(walls.with_open(Direction::South), walls);
    }
}
