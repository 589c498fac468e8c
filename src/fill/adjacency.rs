//! Same-faction adjacency of a cell

use crate::claims::ClaimStore;
use crate::core::types::FactionId;
use crate::grid::{Direction, GridPoint};

/// Which cardinal neighbors are claimed by the same faction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Connections([bool; 4]);

impl Connections {
    pub fn new(connected: [bool; 4]) -> Self {
        Self(connected)
    }

    /// Inspect the 4 neighbors of `point` for claims owned by `faction`
    pub fn of(
        store: &dyn ClaimStore,
        point: GridPoint,
        faction: FactionId,
        level: &str,
    ) -> Self {
        Self(Direction::ALL.map(|dir| store.get(point.step(dir), level) == Some(faction)))
    }

    pub fn has(&self, dir: Direction) -> bool {
        self.0[dir.index()]
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&connected| connected).count()
    }

    /// Connected directions in index order
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|dir| self.has(*dir))
    }

    /// Exactly two connections, facing each other across the cell
    pub fn is_straight_pair(&self) -> bool {
        let mut dirs = self.iter();
        match (dirs.next(), dirs.next(), dirs.next()) {
            (Some(a), Some(b), None) => a.same_axis(b),
            _ => false,
        }
    }
}
