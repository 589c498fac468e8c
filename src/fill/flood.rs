//! Capped flood fill through unclaimed cells

use std::collections::VecDeque;

use ahash::AHashSet;

use crate::claims::ClaimStore;
use crate::grid::GridPoint;

/// Cells discovered by one flood fill
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloodFill {
    /// Discovered cells in discovery order, seed first
    pub cells: Vec<GridPoint>,
    /// True if the fill stopped at its limit rather than at claims
    pub truncated: bool,
}

impl FloodFill {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Grow from `seed` through cells nobody has claimed, up to `limit` cells
///
/// Expansion is breadth-first in neighbor order, so when the limit cuts a
/// fill short the cells nearest the seed are the ones kept.
pub fn flood_fill(store: &dyn ClaimStore, seed: GridPoint, level: &str, limit: usize) -> FloodFill {
    if limit == 0 {
        return FloodFill {
            cells: Vec::new(),
            truncated: true,
        };
    }

    let mut seen = AHashSet::new();
    let mut cells = vec![seed];
    let mut frontier = VecDeque::from([seed]);
    seen.insert(seed);

    while let Some(point) = frontier.pop_front() {
        for neighbor in point.neighbors() {
            if seen.contains(&neighbor) || store.is_claimed(neighbor, level) {
                continue;
            }
            if cells.len() >= limit {
                return FloodFill {
                    cells,
                    truncated: true,
                };
            }
            seen.insert(neighbor);
            cells.push(neighbor);
            frontier.push_back(neighbor);
        }
    }

    FloodFill {
        cells,
        truncated: false,
    }
}
