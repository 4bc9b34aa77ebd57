//! Optional user configuration.
//!
//! Read once at startup from `<config dir>/deskcalc/config.toml`; a missing
//! file just yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::format::DigitGrouping;

/// Contents of `config.toml`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Digit-grouping convention for the display.
    pub grouping: DigitGrouping,
}

impl Config {
    /// Default location: `<config dir>/deskcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("deskcalc").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.grouping, DigitGrouping::SouthAsian);
    }

    #[test]
    fn test_grouping_from_toml() {
        let config: Config = toml::from_str(r#"grouping = "western""#).unwrap();
        assert_eq!(config.grouping, DigitGrouping::Western);

        let config: Config = toml::from_str(r#"grouping = "south-asian""#).unwrap();
        assert_eq!(config.grouping, DigitGrouping::SouthAsian);

        let config: Config = toml::from_str(r#"grouping = "plain""#).unwrap();
        assert_eq!(config.grouping, DigitGrouping::Plain);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<Config>(r#"theme = "dark""#).is_err());
    }
}
