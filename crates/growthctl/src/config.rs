//! growthctl configuration
//!
//! Config file: ~/.config/growth/config.toml or /etc/growth/config.toml

use anyhow::{Context, Result};
use growth_analytics::{GrowthMetric, PredictionMethod, Timeframe, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Color display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Defaults for analysis commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Metric analysed by `report` when none is given
    #[serde(default)]
    pub default_metric: GrowthMetric,

    /// Lookback window for trend analysis
    #[serde(default)]
    pub default_timeframe: Timeframe,

    /// Extrapolation used by `report` and `predict`
    #[serde(default = "default_prediction_method")]
    pub prediction_method: PredictionMethod,

    /// Newest history entries kept when loading an export
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

// Dashboards forecast with the least-squares fit
fn default_prediction_method() -> PredictionMethod {
    PredictionMethod::Polynomial
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_metric: GrowthMetric::default(),
            default_timeframe: Timeframe::default(),
            prediction_method: default_prediction_method(),
            history_capacity: default_history_capacity(),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl GrowthConfig {
    /// User config path: ~/.config/growth/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Cannot determine config directory")?;
        Ok(config_dir.join("growth").join("config.toml"))
    }

    /// System config path: /etc/growth/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/growth/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. User config (~/.config/growth/config.toml)
    /// 2. System config (/etc/growth/config.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: GrowthConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save to the user config file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::user_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Set a value from a `key=value` style pair
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.trim() {
            "analysis.default_metric" | "metric" => {
                self.analysis.default_metric = value.parse()?;
            }
            "analysis.default_timeframe" | "timeframe" => {
                self.analysis.default_timeframe = value.parse()?;
            }
            "analysis.prediction_method" | "method" => {
                self.analysis.prediction_method = value.parse()?;
            }
            "analysis.history_capacity" | "capacity" => {
                let capacity: usize = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid history capacity: '{}'", value))?;
                if capacity == 0 {
                    anyhow::bail!("History capacity must be at least 1");
                }
                self.analysis.history_capacity = capacity;
            }
            "output.color" | "color" => {
                self.output.color = match value.trim().to_lowercase().as_str() {
                    "auto" => ColorMode::Auto,
                    "always" | "on" | "yes" | "true" => ColorMode::Always,
                    "never" | "off" | "no" | "false" => ColorMode::Never,
                    _ => anyhow::bail!(
                        "Invalid color mode: '{}'. Valid values: auto, always, never",
                        value
                    ),
                };
            }
            _ => anyhow::bail!("Unknown config key: '{}'", key),
        }
        Ok(())
    }
}
