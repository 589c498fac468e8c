//! A single territorial claim

use serde::{Deserialize, Serialize};

use crate::core::types::FactionId;
use crate::grid::GridPoint;

/// Ownership of one grid cell on one level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claim {
    pub x: i32,
    pub z: i32,
    pub level: String,
    pub faction: FactionId,
}

impl Claim {
    pub fn new(x: i32, z: i32, level: impl Into<String>, faction: FactionId) -> Self {
        Self {
            x,
            z,
            level: level.into(),
            faction,
        }
    }

    pub fn at(point: GridPoint, level: impl Into<String>, faction: FactionId) -> Self {
        Self::new(point.x, point.z, level, faction)
    }

    pub fn point(&self) -> GridPoint {
        GridPoint::new(self.x, self.z)
    }
}
