//! Configuration System
//!
//! Simulation parameters and the TOML file they can be loaded from. Every
//! section is optional; missing values fall back to the reference defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use society_events::ThinkerKind;

use crate::error::{ConfigError, ParameterError};

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "society.toml";

/// Largest grid a run may allocate
pub const MAX_CELLS: usize = 4_000_000;

/// Complete simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocietyConfig {
    /// Grid dimensions
    #[serde(default)]
    pub grid: GridConfig,
    /// Rule parameters
    #[serde(default)]
    pub parameters: Parameters,
    /// Headless run settings
    #[serde(default)]
    pub run: RunConfig,
}

impl SocietyConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        self.grid.validate()?;
        self.parameters.validate()
    }
}

/// Grid dimensions. Fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 50, cols: 50 }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total cells, or `None` if `rows * cols` overflows.
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        check_at_least("rows", self.rows as f64, 1.0)?;
        check_at_least("cols", self.cols as f64, 1.0)?;
        let cells = self.cell_count().unwrap_or(usize::MAX);
        check_range("rows * cols", cells as f64, 1.0, MAX_CELLS as f64)
    }
}

/// Rule parameters for a run.
///
/// `initial_critical_percent` only matters at reset; every other field may
/// change between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Share of critical thinkers at initialization, 0-100
    pub initial_critical_percent: f64,
    /// Chebyshev radius of the social neighborhood, at least 1
    pub influence_radius: usize,
    /// Strength of media influence on non-critical thinkers, 0-10
    pub media_influence: f64,
    /// Education strength, 1-10. Caps critical thinker influence.
    pub education_strength: f64,
    /// Confirmation bias, 1-10. Caps non-critical thinker influence.
    pub confirmation_bias: f64,
    /// Enables media events and life events
    pub random_events_enabled: bool,
    /// Delay between generations while running
    pub tick_period_ms: u64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            initial_critical_percent: 30.0,
            influence_radius: 2,
            media_influence: 3.0,
            education_strength: 5.0,
            confirmation_bias: 4.0,
            random_events_enabled: true,
            tick_period_ms: 200,
        }
    }
}

impl Parameters {
    /// Checks every documented bound.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_range(
            "initial_critical_percent",
            self.initial_critical_percent,
            0.0,
            100.0,
        )?;
        check_at_least("influence_radius", self.influence_radius as f64, 1.0)?;
        check_range("media_influence", self.media_influence, 0.0, 10.0)?;
        check_range("education_strength", self.education_strength, 1.0, 10.0)?;
        check_range("confirmation_bias", self.confirmation_bias, 1.0, 10.0)?;
        check_at_least("tick_period_ms", self.tick_period_ms as f64, 1.0)
    }

    /// Upper bound on influence for an agent of the given kind.
    pub fn influence_cap(&self, kind: ThinkerKind) -> f64 {
        match kind {
            ThinkerKind::CriticalThinker => self.education_strength,
            ThinkerKind::NonCriticalThinker => self.confirmation_bias,
        }
    }

    /// Chance a non-critical thinker absorbs a media event.
    pub fn media_susceptibility(&self) -> f64 {
        self.media_influence / 10.0
    }

    pub fn tick_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_period_ms)
    }
}

/// Settings for the headless runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Generations to simulate before exiting
    pub generations: u64,
    /// Log statistics every N generations
    pub report_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            generations: 500,
            report_interval: 25,
        }
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite { name, value });
    }
    if value < min || value > max {
        return Err(ParameterError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_at_least(name: &'static str, value: f64, min: f64) -> Result<(), ParameterError> {
    check_range(name, value, min, f64::INFINITY)
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Society Simulation Configuration

[grid]
rows = 50
cols = 50

[parameters]
initial_critical_percent = 30.0
influence_radius = 2
media_influence = 3.0
education_strength = 5.0
confirmation_bias = 4.0
random_events_enabled = true
tick_period_ms = 200

[run]
seed = 42
generations = 500
report_interval = 25
"#
    .to_string()
}
