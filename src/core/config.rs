//! Fill engine configuration with documented constants
//!
//! All tuning knobs for the claim auto-fill engine live here, together with
//! what they bound and how they interact.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{ClaimError, Result};

/// Configuration for the claim auto-fill engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Master switch for auto-filling enclosed areas
    ///
    /// When false, claim-added notifications are acknowledged and ignored.
    pub enabled: bool,

    /// Maximum number of cells a single claim may auto-fill
    ///
    /// This is the sole cost bound on the fill phase. It applies to the whole
    /// invocation, across every polygon the new claim closes. If a "closure"
    /// turns out not to be enclosed, this is also how much of the open map
    /// gets claimed before the fill stops.
    pub max_fill: usize,

    /// Maximum number of cell steps a boundary traversal may take
    ///
    /// Traversal walks the contiguous same-faction boundary and is otherwise
    /// bounded only by the size of the claim set. Exceeding this aborts the
    /// fill for that claim (the claim itself stays).
    pub max_traversal_steps: usize,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_fill: 100,
            max_traversal_steps: 100_000,
        }
    }
}

impl FillConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_fill(mut self, max_fill: usize) -> Self {
        self.max_fill = max_fill;
        self
    }

    pub fn with_max_traversal_steps(mut self, steps: usize) -> Self {
        self.max_traversal_steps = steps;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_traversal_steps == 0 {
            return Err(ClaimError::InvalidConfig(
                "max_traversal_steps must be positive".into(),
            ));
        }

        // A traversal shorter than a 2x2 loop can never close anything
        if self.max_traversal_steps < 4 {
            return Err(ClaimError::InvalidConfig(format!(
                "max_traversal_steps ({}) is too small to close any loop",
                self.max_traversal_steps
            )));
        }

        Ok(())
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FillConfig = toml::from_str(content).map_err(ClaimError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<FillConfig> = OnceLock::new();

/// Get the global fill config (initializes with defaults if not set)
pub fn config() -> &'static FillConfig {
    CONFIG.get_or_init(FillConfig::default)
}

/// Set the global fill config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: FillConfig) -> std::result::Result<(), FillConfig> {
    CONFIG.set(config)
}
