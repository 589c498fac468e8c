//! Claim lookup and creation
//!
//! The fill engine only ever talks to [`ClaimStore`]. [`ClaimMap`] is the
//! in-memory implementation used by the simulator and tests.

use ahash::AHashMap;

use super::claim::Claim;
use crate::core::types::FactionId;
use crate::grid::GridPoint;

/// Claim persistence as seen by the fill engine
///
/// A claim inserted through this trait must be visible to the very next
/// `get`. Inserting never triggers claim-added notifications.
pub trait ClaimStore {
    /// Owning faction of a cell, if claimed
    fn get(&self, point: GridPoint, level: &str) -> Option<FactionId>;

    fn insert(&mut self, claim: Claim);

    fn is_claimed(&self, point: GridPoint, level: &str) -> bool {
        self.get(point, level).is_some()
    }
}

/// In-memory claim store, one sparse grid per level
#[derive(Debug, Clone, Default)]
pub struct ClaimMap {
    levels: AHashMap<String, AHashMap<GridPoint, FactionId>>,
}

impl ClaimMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total claims across all levels
    pub fn len(&self) -> usize {
        self.levels.values().map(|grid| grid.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All claimed cells on a level
    pub fn level_claims<'a>(
        &'a self,
        level: &str,
    ) -> impl Iterator<Item = (GridPoint, FactionId)> + 'a {
        self.levels
            .get(level)
            .into_iter()
            .flat_map(|grid| grid.iter().map(|(point, faction)| (*point, *faction)))
    }

    /// Number of cells a faction holds on a level
    pub fn count_for(&self, faction: FactionId, level: &str) -> usize {
        self.level_claims(level)
            .filter(|(_, owner)| *owner == faction)
            .count()
    }
}

impl ClaimStore for ClaimMap {
    fn get(&self, point: GridPoint, level: &str) -> Option<FactionId> {
        self.levels.get(level)?.get(&point).copied()
    }

    fn insert(&mut self, claim: Claim) {
        let point = claim.point();
        self.levels
            .entry(claim.level)
            .or_default()
            .insert(point, claim.faction);
    }
}
