//! Field configuration and its validation.
//!
//! Configuration is immutable while a session runs; the session only accepts
//! changes while idle (see `GameState::reconfigure`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    ConfigChange, BASE_SPEED_MAX_MS, BASE_SPEED_MIN_MS, DEFAULT_BASE_SPEED_MS, DEFAULT_HEIGHT,
    DEFAULT_WIDTH, HEIGHT_MAX, HEIGHT_MIN, WIDTH_MAX, WIDTH_MIN,
};

/// Environment variable overriding the field width
pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
/// Environment variable overriding the field height
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";
/// Environment variable overriding the base gravity interval
pub const ENV_BASE_SPEED_MS: &str = "BLOCKFALL_BASE_SPEED_MS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("width {0} outside {min}..={max}", min = WIDTH_MIN, max = WIDTH_MAX)]
    WidthOutOfRange(u8),

    #[error("height {0} outside {min}..={max}", min = HEIGHT_MIN, max = HEIGHT_MAX)]
    HeightOutOfRange(u8),

    #[error(
        "base speed {0}ms outside {min}..={max}",
        min = BASE_SPEED_MIN_MS,
        max = BASE_SPEED_MAX_MS
    )]
    BaseSpeedOutOfRange(u32),

    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Playfield dimensions and base gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: u8,
    pub height: u8,
    pub base_speed_ms: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            base_speed_ms: DEFAULT_BASE_SPEED_MS,
        }
    }
}

impl FieldConfig {
    /// Build a validated configuration
    pub fn new(width: u8, height: u8, base_speed_ms: u32) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            base_speed_ms,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(WIDTH_MIN..=WIDTH_MAX).contains(&self.width) {
            return Err(ConfigError::WidthOutOfRange(self.width));
        }
        if !(HEIGHT_MIN..=HEIGHT_MAX).contains(&self.height) {
            return Err(ConfigError::HeightOutOfRange(self.height));
        }
        if !(BASE_SPEED_MIN_MS..=BASE_SPEED_MAX_MS).contains(&self.base_speed_ms) {
            return Err(ConfigError::BaseSpeedOutOfRange(self.base_speed_ms));
        }
        Ok(())
    }

    /// Configuration with one change applied, or the validation error.
    pub fn with_change(&self, change: ConfigChange) -> Result<Self, ConfigError> {
        let mut next = *self;
        match change {
            ConfigChange::Width(w) => next.width = w,
            ConfigChange::Height(h) => next.height = h,
            ConfigChange::BaseSpeedMs(ms) => next.base_speed_ms = ms,
        }
        next.validate()?;
        Ok(next)
    }

    /// Apply `BLOCKFALL_*` environment overrides.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment in production).
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = lookup(ENV_WIDTH) {
            self.width = parse_var(ENV_WIDTH, &v)?;
        }
        if let Some(v) = lookup(ENV_HEIGHT) {
            self.height = parse_var(ENV_HEIGHT, &v)?;
        }
        if let Some(v) = lookup(ENV_BASE_SPEED_MS) {
            self.base_speed_ms = parse_var(ENV_BASE_SPEED_MS, &v)?;
        }
        self.validate()?;
        Ok(self)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            FieldConfig::new(5, 20, 500),
            Err(ConfigError::WidthOutOfRange(5))
        );
        assert_eq!(
            FieldConfig::new(21, 20, 500),
            Err(ConfigError::WidthOutOfRange(21))
        );
        assert_eq!(
            FieldConfig::new(10, 9, 500),
            Err(ConfigError::HeightOutOfRange(9))
        );
        assert_eq!(
            FieldConfig::new(10, 20, 99),
            Err(ConfigError::BaseSpeedOutOfRange(99))
        );
        assert_eq!(
            FieldConfig::new(10, 20, 1001),
            Err(ConfigError::BaseSpeedOutOfRange(1001))
        );
    }

    #[test]
    fn test_with_change() {
        let config = FieldConfig::default();
        let wider = config.with_change(ConfigChange::Width(14)).unwrap();
        assert_eq!(wider.width, 14);
        assert_eq!(wider.height, config.height);
        assert!(config.with_change(ConfigChange::BaseSpeedMs(50)).is_err());
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = FieldConfig::default()
            .with_overrides_from(|var| match var {
                ENV_WIDTH => Some("12".to_string()),
                ENV_BASE_SPEED_MS => Some(" 400 ".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 20);
        assert_eq!(config.base_speed_ms, 400);
    }

    #[test]
    fn test_overrides_reject_garbage() {
        let err = FieldConfig::default()
            .with_overrides_from(|var| (var == ENV_HEIGHT).then(|| "tall".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnv {
                var: ENV_HEIGHT,
                value: "tall".to_string()
            }
        );
    }

    #[test]
    fn test_deserialize_partial_toml_table_uses_defaults() {
        let config: FieldConfig = toml::from_str("width = 8").unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 20);
        assert_eq!(config.base_speed_ms, 1000);
    }
}
