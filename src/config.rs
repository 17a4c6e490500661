//! Program configuration: a TOML file with `[field]` and `[coach]` tables,
//! then environment overrides.
//!
//! ```toml
//! [field]
//! width = 12
//! base_speed_ms = 800
//!
//! [coach]
//! enabled = true
//! timeout_ms = 3000
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::coach::CoachConfig;
use crate::core::FieldConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub coach: CoachConfig,
}

impl GameConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid config file")?;
        config.field.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("loading {}", path.display()))
    }

    /// File (if any) plus environment overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Result<Self> {
        Ok(Self {
            field: self.field.with_env_overrides()?,
            coach: self.coach.with_env_overrides(),
        })
    }
}
