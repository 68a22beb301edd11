use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Helios configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HeliosConfig {
    /// Curve defaults.
    #[serde(default)]
    pub curve: CurveToml,

    /// Working-day defaults.
    #[serde(default)]
    pub workdays: WorkdaysToml,
}

impl HeliosConfig {
    /// Loads configuration from an optional TOML file.
    ///
    /// `None` yields the built-in defaults, matching a project with no
    /// configuration file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

/// Default rates used when the matching CLI flag is absent.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CurveToml {
    /// Default flat rate for the constant method.
    #[serde(default)]
    pub units_per_day: Option<f64>,

    /// Default first-day rate for ramp methods.
    #[serde(default)]
    pub start_rate: Option<f64>,

    /// Default last-day rate for ramp methods.
    #[serde(default)]
    pub end_rate: Option<f64>,

    /// Default peak rate for the s-curve method.
    #[serde(default)]
    pub peak_rate: Option<f64>,
}

/// Default weekend inclusion for the custom working-day policy.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WorkdaysToml {
    /// Count Saturdays as working days.
    #[serde(default)]
    pub include_saturday: bool,

    /// Count Sundays as working days.
    #[serde(default)]
    pub include_sunday: bool,
}
