//! Calculator configuration.
//!
//! Handles parsing of the `config.toml` file in the user's config
//! directory. Every field is optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calculator::Limits;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CalculatorConfig {
    /// Input and display limits
    #[serde(default)]
    pub limits: Limits,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl CalculatorConfig {
    /// Location of the config file under the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load from `path` if given, otherwise from the default location.
    /// A missing default file yields the defaults; a missing explicit
    /// file is an error.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let config: CalculatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.limits.input_cap == 0 {
            return Err(ConfigError::Invalid("limits.input_cap must be at least 1".into()));
        }
        if self.limits.display_width == 0 {
            return Err(ConfigError::Invalid(
                "limits.display_width must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.limits.input_cap, 12);
        assert_eq!(config.limits.display_width, 12);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CalculatorConfig::parse("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = CalculatorConfig::parse("[limits]\ninput_cap = 8\n").unwrap();
        assert_eq!(config.limits.input_cap, 8);
        assert_eq!(config.limits.display_width, 12);
    }

    #[test]
    fn test_log_level() {
        let config = CalculatorConfig::parse("[log]\nlevel = \"zcalc=debug\"\n").unwrap();
        assert_eq!(config.log.level, "zcalc=debug");
    }

    #[test]
    fn test_zero_limits_rejected() {
        assert!(matches!(
            CalculatorConfig::parse("[limits]\ninput_cap = 0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CalculatorConfig::parse("[limits]\ndisplay_width = 0\n"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            CalculatorConfig::parse("[limits\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CalculatorConfig::parse("[limits]\ninput_cap = \"many\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
