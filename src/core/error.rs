use thiserror::Error;

use crate::grid::GridPoint;

#[derive(Error, Debug)]
pub enum ClaimError {
    #[error("Traversal from {start} gave up after {steps} steps")]
    TraversalExhausted { start: GridPoint, steps: usize },

    #[error("Parallel closure at {start} without a main branch direction")]
    MissingBranchDirection { start: GridPoint },

    #[error("Points {from} and {to} are not cardinally aligned")]
    Misaligned { from: GridPoint, to: GridPoint },

    #[error("Config IO error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[source] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Scenario parse error: {0}")]
    ScenarioParse(#[source] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClaimError>;
