//! Cardinal directions and diagonal corners on the claim grid
//!
//! `North` is +z and `East` is +x. Index order matches the order neighbors
//! and diagonals are reported in, and is also the rotation order used when
//! retrying fill seeds.

use serde::{Deserialize, Serialize};

/// Cardinal direction between claim cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// Position in [`Direction::ALL`]
    pub fn index(self) -> usize {
        match self {
            Direction::East => 0,
            Direction::West => 1,
            Direction::North => 2,
            Direction::South => 3,
        }
    }

    /// (dx, dz) offset of one step
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::North => (0, 1),
            Direction::South => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }

    /// Next direction in index order, wrapping around
    pub fn next(self) -> Self {
        Direction::ALL[(self.index() + 1) % 4]
    }

    /// True for East/West
    pub fn is_x_axis(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    pub fn same_axis(self, other: Direction) -> bool {
        self.is_x_axis() == other.is_x_axis()
    }
}

/// Diagonal corner of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    NorthEast,
    SouthEast,
    NorthWest,
    SouthWest,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::NorthEast,
        Corner::SouthEast,
        Corner::NorthWest,
        Corner::SouthWest,
    ];

    pub fn index(self) -> usize {
        match self {
            Corner::NorthEast => 0,
            Corner::SouthEast => 1,
            Corner::NorthWest => 2,
            Corner::SouthWest => 3,
        }
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Corner::NorthEast => (1, 1),
            Corner::SouthEast => (1, -1),
            Corner::NorthWest => (-1, 1),
            Corner::SouthWest => (-1, -1),
        }
    }

    pub fn next(self) -> Self {
        Corner::ALL[(self.index() + 1) % 4]
    }

    /// Corner a perpendicular closure bends toward
    ///
    /// `initial` is the direction the traversal left start in, `closing` the
    /// direction from start to the cell it came back from.
    pub fn for_closure(initial: Direction, closing: Direction) -> Self {
        match (initial, closing) {
            (Direction::East, Direction::North) => Corner::NorthEast,
            (Direction::East, _) => Corner::SouthEast,
            (Direction::West, Direction::North) => Corner::NorthWest,
            (Direction::West, _) => Corner::SouthWest,
            (Direction::North, Direction::East) => Corner::NorthEast,
            (Direction::North, _) => Corner::NorthWest,
            (Direction::South, Direction::East) => Corner::SouthEast,
            (Direction::South, _) => Corner::SouthWest,
        }
    }

    /// Corner a parallel closure pairs with its main branch direction
    pub fn for_parallel(along: Direction) -> Self {
        if along.index() % 2 == 0 {
            Corner::NorthEast
        } else {
            Corner::SouthWest
        }
    }
}
