//! Tool configuration loaded from a TOML file
//!
//! ```toml
//! [mesher]
//! voxel_size = 1.0
//! dimensions = [64, 32, 64]
//!
//! [field]
//! kind = "terrain"
//! seed = 7
//! base_height = 12.0
//! ```

use anyhow::{Context, Result};
use mesher::{FieldConfig, MesherConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshtoolConfig {
    #[serde(default)]
    pub mesher: MesherConfig,
    #[serde(default)]
    pub field: FieldConfig,
}

impl MeshtoolConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("failed to parse config")?;
        config.mesher.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
