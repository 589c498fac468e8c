//! Claim scenarios: an ordered list of claims replayed through a territory
//!
//! Scenarios come from TOML files or from a seeded random walk. Factions are
//! named in the file and get a fresh [`FactionId`] per replay.

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::claims::{Claim, ClaimMap, ClaimStore, Territory};
use crate::core::error::{ClaimError, Result};
use crate::core::types::FactionId;
use crate::fill::ClaimFiller;
use crate::grid::{Direction, GridPoint};

fn default_level() -> String {
    "overworld".to_string()
}

/// One claim in a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioClaim {
    pub faction: String,
    pub x: i32,
    pub z: i32,
}

/// Claims to replay, in order, on a single level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub claims: Vec<ScenarioClaim>,
}

/// Outcome of replaying a scenario
pub struct Replay {
    pub level: String,
    pub store: ClaimMap,
    /// Faction names in order of first appearance
    pub factions: Vec<(String, FactionId)>,
    /// Claims refused because the cell was already taken
    pub refused: usize,
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(ClaimError::ScenarioParse)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Seeded random walk: each faction wanders from its own home cell,
    /// claiming as it goes
    pub fn random_walk(claims: usize, factions: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let factions = factions.max(1);
        let mut cursors: Vec<GridPoint> = (0..factions)
            .map(|i| GridPoint::new(i as i32 * 8, 0))
            .collect();

        let mut list = Vec::with_capacity(claims);
        for step in 0..claims {
            let index = step % factions;
            let dir = Direction::ALL[rng.gen_range(0..4)];
            cursors[index] = cursors[index].step(dir);
            list.push(ScenarioClaim {
                faction: faction_label(index),
                x: cursors[index].x,
                z: cursors[index].z,
            });
        }

        Self {
            level: default_level(),
            claims: list,
        }
    }

    /// Add every claim through a territory with `filler` listening
    ///
    /// Cells that are already claimed (by hand or by a fill) are refused,
    /// the way a claim command would refuse them.
    pub fn replay(&self, filler: ClaimFiller) -> Replay {
        let mut territory = Territory::new(ClaimMap::new()).with_listener(filler);
        let mut factions: Vec<(String, FactionId)> = Vec::new();
        let mut refused = 0;

        for entry in &self.claims {
            let faction = match factions.iter().find(|(name, _)| *name == entry.faction) {
                Some((_, id)) => *id,
                None => {
                    let id = FactionId::new();
                    factions.push((entry.faction.clone(), id));
                    id
                }
            };

            let point = GridPoint::new(entry.x, entry.z);
            if territory.store().is_claimed(point, &self.level) {
                refused += 1;
                continue;
            }
            territory.add(Claim::at(point, self.level.clone(), faction));
        }

        Replay {
            level: self.level.clone(),
            store: territory.into_store(),
            factions,
            refused,
        }
    }
}

/// "A", "B", ... "Z", then "F26", "F27", ...
pub fn faction_label(index: usize) -> String {
    if index < 26 {
        ((b'A' + index as u8) as char).to_string()
    } else {
        format!("F{}", index)
    }
}
