//! Claim auto-fill entry point
//!
//! When a faction claims a cell that touches two or more of its own claims,
//! the new claim may close a loop. Each closed loop is traced, a seed cell
//! inside it is picked, and the enclosed unclaimed cells are flooded and
//! claimed for the faction. Failures never propagate to whoever added the
//! claim: the claim stays, the fill is just skipped.

use ahash::AHashSet;
use tracing::{debug, error, info, warn};

use super::adjacency::Connections;
use super::flood::flood_fill;
use super::seed::resolve_seed;
use super::traversal::{BoundaryTracer, BranchOrder, Closure};
use crate::claims::{Claim, ClaimListener, ClaimStore};
use crate::core::config::{config, FillConfig};
use crate::core::error::Result;
use crate::grid::GridPoint;

/// What a fill attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillReport {
    /// Auto-fill is turned off
    Disabled,
    /// The claim closes no loop
    NotEnclosed,
    /// At least one loop closed; `claimed` may still be empty when nothing
    /// inside was free
    Filled {
        closures: usize,
        claimed: Vec<GridPoint>,
        truncated: bool,
    },
    /// Something went wrong and the fill was abandoned
    Skipped { reason: String },
}

impl FillReport {
    /// Cells claimed by this fill
    pub fn claimed(&self) -> &[GridPoint] {
        match self {
            FillReport::Filled { claimed, .. } => claimed,
            _ => &[],
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FillReport::Skipped { .. })
    }
}

/// Fills areas enclosed by a faction's claims
#[derive(Debug, Clone)]
pub struct ClaimFiller {
    config: FillConfig,
}

impl Default for ClaimFiller {
    /// Uses the global fill config
    fn default() -> Self {
        Self::new(config().clone())
    }
}

impl ClaimFiller {
    pub fn new(config: FillConfig) -> Self {
        Self { config }
    }

    /// Fill whatever `claim` encloses
    ///
    /// `claim` must already be in `store`. Claims created here go straight
    /// into the store and never trigger another fill.
    pub fn fill(&self, claim: &Claim, store: &mut dyn ClaimStore) -> FillReport {
        if !self.config.enabled {
            return FillReport::Disabled;
        }

        match self.try_fill(claim, store) {
            Ok(report) => report,
            Err(err) => {
                error!(
                    "Fill skipped for claim at ({}, {}) in {} for {}: {}",
                    claim.x, claim.z, claim.level, claim.faction, err
                );
                FillReport::Skipped {
                    reason: err.to_string(),
                }
            }
        }
    }

    fn try_fill(&self, claim: &Claim, store: &mut dyn ClaimStore) -> Result<FillReport> {
        let start = claim.point();
        let level = claim.level.as_str();

        let connections = Connections::of(store, start, claim.faction, level);
        // One connection is just a line; a loop needs a second way back
        if connections.count() < 2 {
            return Ok(FillReport::NotEnclosed);
        }

        let closures = self.find_closures(claim, connections, store)?;
        if closures.is_empty() {
            return Ok(FillReport::NotEnclosed);
        }

        let mut discovered: Vec<GridPoint> = Vec::new();
        let mut known: AHashSet<GridPoint> = AHashSet::new();
        let mut truncated = false;

        for closure in &closures {
            let Some(seed) = resolve_seed(closure, start, store, level) else {
                continue;
            };
            if known.contains(&seed) {
                debug!("Seed {} already covered by an earlier fill", seed);
                continue;
            }

            let remaining = self.config.max_fill.saturating_sub(discovered.len());
            let flood = flood_fill(store, seed, level, remaining);
            debug!("Flooded {} cells from {}", flood.len(), seed);
            truncated |= flood.truncated;
            for cell in flood.cells {
                if known.insert(cell) {
                    discovered.push(cell);
                }
            }
        }

        if truncated {
            warn!(
                "Fill from ({}, {}) in {} hit the {} cell cap",
                claim.x, claim.z, level, self.config.max_fill
            );
        }

        let mut claimed = Vec::with_capacity(discovered.len());
        for cell in discovered {
            if store.is_claimed(cell, level) {
                continue;
            }
            store.insert(Claim::at(cell, level, claim.faction));
            claimed.push(cell);
        }

        if !claimed.is_empty() {
            info!(
                "Auto-filled {} cells for {} in {} around ({}, {})",
                claimed.len(),
                claim.faction,
                level,
                claim.x,
                claim.z
            );
        }

        Ok(FillReport::Filled {
            closures: closures.len(),
            claimed,
            truncated,
        })
    }

    /// Trace a loop from every way out of the claim, in both tie-break orders
    ///
    /// A claim with `n` connections touches up to `n` loops: a junction in
    /// the middle of a walled area can close a room in every quadrant.
    /// Several traces often walk the same loop (a claim on a wall shared by
    /// two rooms, or a plain ring), so loops with the same cells are kept
    /// once.
    fn find_closures(
        &self,
        claim: &Claim,
        connections: Connections,
        store: &dyn ClaimStore,
    ) -> Result<Vec<Closure>> {
        let tracer = BoundaryTracer::new(
            store,
            claim.point(),
            claim.faction,
            &claim.level,
            self.config.max_traversal_steps,
        );
        let mut closures: Vec<Closure> = Vec::new();
        let mut loops: Vec<Vec<GridPoint>> = Vec::new();
        for order in [BranchOrder::Forward, BranchOrder::Reverse] {
            for initial in connections.iter() {
                let Some(closure) = tracer.trace_ordered(initial, order)? else {
                    continue;
                };
                let cells = loop_cells(&closure.path);
                if loops.contains(&cells) {
                    debug!("Loop from {:?} ({:?}) was already found", initial, order);
                    continue;
                }
                loops.push(cells);
                closures.push(closure);
            }
        }
        Ok(closures)
    }
}

/// Cells of a loop, independent of where it starts or which way it runs
fn loop_cells(path: &[GridPoint]) -> Vec<GridPoint> {
    let mut cells = path.to_vec();
    cells.sort_by_key(|p| (p.x, p.z));
    cells.dedup();
    cells
}

impl ClaimListener for ClaimFiller {
    fn on_claim_added(&self, claim: &Claim, store: &mut dyn ClaimStore) {
        let report = self.fill(claim, store);
        debug!("Fill for ({}, {}): {:?}", claim.x, claim.z, report);
    }
}
