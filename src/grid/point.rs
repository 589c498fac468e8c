//! Integer grid position in chunk units

use std::fmt;

use serde::{Deserialize, Serialize};

use super::dir::{Corner, Direction};

/// A cell on a level's claim grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct GridPoint {
    pub x: i32,
    pub z: i32,
}

impl GridPoint {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Offset position; coordinates wrap at the ends of the `i32` range
    pub fn at_delta(&self, dx: i32, dz: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.z.wrapping_add(dz))
    }

    /// Cell one step away in `dir`
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dz) = dir.offset();
        self.at_delta(dx, dz)
    }

    pub fn diagonal(&self, corner: Corner) -> Self {
        let (dx, dz) = corner.offset();
        self.at_delta(dx, dz)
    }

    /// The 4 cardinal neighbors, in [`Direction::ALL`] order
    pub fn neighbors(&self) -> [GridPoint; 4] {
        Direction::ALL.map(|dir| self.step(dir))
    }

    /// Manhattan distance, saturating at `u32::MAX`
    pub fn distance(&self, other: &Self) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.z.abs_diff(other.z))
    }

    /// Direction from self toward `other`
    ///
    /// None unless the two points differ on exactly one axis.
    pub fn direction_to(&self, other: &Self) -> Option<Direction> {
        match (other.x.cmp(&self.x), other.z.cmp(&self.z)) {
            (std::cmp::Ordering::Equal, std::cmp::Ordering::Greater) => Some(Direction::North),
            (std::cmp::Ordering::Equal, std::cmp::Ordering::Less) => Some(Direction::South),
            (std::cmp::Ordering::Greater, std::cmp::Ordering::Equal) => Some(Direction::East),
            (std::cmp::Ordering::Less, std::cmp::Ordering::Equal) => Some(Direction::West),
            _ => None,
        }
    }

    /// True if self is strictly closer to `target` than `than` is
    pub fn closer_to(&self, target: &Self, than: &Self) -> bool {
        self.distance(target) < than.distance(target)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
