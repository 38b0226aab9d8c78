use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::DemoError;

/// What the demo computes: one pair of operands, run at `levels` doubled
/// precisions (1 = double-double, 2 = quad, 3 = oct).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_lhs")]
    pub lhs: f64,
    #[serde(default = "default_rhs")]
    pub rhs: f64,
    #[serde(default = "default_levels")]
    pub levels: u32,
}

fn default_lhs() -> f64 {
    1.0
}

fn default_rhs() -> f64 {
    3.0
}

fn default_levels() -> u32 {
    DemoConfig::MAX_LEVELS
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            lhs: default_lhs(),
            rhs: default_rhs(),
            levels: default_levels(),
        }
    }
}

impl DemoConfig {
    pub const MAX_LEVELS: u32 = 3;

    /// Load from a JSON file, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, DemoError> {
        let Some(path) = path else {
            debug!("No config path given, using defaults");
            return Ok(Self::default());
        };
        let data = fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&data)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(data: &str) -> Result<Self, DemoError> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if !(1..=Self::MAX_LEVELS).contains(&self.levels) {
            return Err(DemoError::InvalidLevels(self.levels));
        }
        if !self.lhs.is_finite() {
            return Err(DemoError::InvalidOperand {
                name: "lhs",
                value: self.lhs,
            });
        }
        if !self.rhs.is_finite() || self.rhs == 0.0 {
            return Err(DemoError::InvalidOperand {
                name: "rhs",
                value: self.rhs,
            });
        }
        Ok(())
    }
}
