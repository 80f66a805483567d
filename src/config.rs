use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level Almanac configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Output formatting settings.
    #[serde(default)]
    pub display: DisplayToml,

    /// Defaults for the `range` command.
    #[serde(default)]
    pub range: RangeToml,
}

impl AlmanacConfig {
    /// Loads the configuration from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_style")]
    pub style: String,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            style: default_style(),
        }
    }
}

fn default_style() -> String {
    "iso".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "default_range_days")]
    pub days: usize,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            days: default_range_days(),
        }
    }
}

fn default_range_days() -> usize {
    7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: AlmanacConfig = toml::from_str("").unwrap();
        assert_eq!(config.display.style, "iso");
        assert_eq!(config.range.days, 7);
    }

    #[test]
    fn sections_override_defaults() {
        let config: AlmanacConfig = toml::from_str(
            r#"
            [display]
            style = "long"

            [range]
            days = 14
            "#,
        )
        .unwrap();
        assert_eq!(config.display.style, "long");
        assert_eq!(config.range.days, 14);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<AlmanacConfig>("[display]\ncolour = true\n").is_err());
        assert!(toml::from_str::<AlmanacConfig>("[agenda]\n").is_err());
    }

    #[test]
    fn load_without_path() {
        let config = AlmanacConfig::load(None).unwrap();
        assert_eq!(config.range.days, 7);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = AlmanacConfig::load(Some(Path::new("/nonexistent/almanac.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/almanac.toml"));
    }
}
