use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{SizingMode, UniformRounding};

/// Processing parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingParams {
    pub mode: SizingMode,
    /// Uniform mode only: use the largest content extent as-is instead of
    /// rounding each axis up to a power of two
    pub exact: bool,
    /// File extensions (without dot, case-insensitive) picked up from the input directory
    pub extensions: Vec<String>,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            mode: SizingMode::Individual,
            exact: false,
            extensions: vec!["png".to_string()],
        }
    }
}

impl ProcessingParams {
    pub fn rounding(&self) -> UniformRounding {
        UniformRounding::from_exact_flag(self.exact)
    }

    /// Load params from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
