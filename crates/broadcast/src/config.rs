//! Configuration loading for headline display.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Headline display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// How long a headline stays visible
    pub display_duration_ms: u64,
    /// Prefix shown before the headline text
    pub label: String,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            display_duration_ms: 3000,
            label: "Media".to_string(),
        }
    }
}

impl BroadcastConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, BroadcastConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, BroadcastConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BroadcastConfigError> {
        if self.display_duration_ms == 0 {
            return Err(BroadcastConfigError::ZeroDuration);
        }
        Ok(())
    }

    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(self.display_duration_ms)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum BroadcastConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("display_duration_ms must be at least 1")]
    ZeroDuration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BroadcastConfig::default();
        assert_eq!(config.display_duration(), Duration::from_secs(3));
        assert_eq!(config.label, "Media");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = BroadcastConfig::from_str("display_duration_ms = 500").unwrap();
        assert_eq!(config.display_duration_ms, 500);
        assert_eq!(config.label, "Media");
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(matches!(
            BroadcastConfig::from_str("display_duration_ms = 0"),
            Err(BroadcastConfigError::ZeroDuration)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broadcast.toml");
        std::fs::write(&path, "label = \"News\"\n").unwrap();

        let config = BroadcastConfig::from_file(&path).unwrap();
        assert_eq!(config.label, "News");
        assert!(matches!(
            BroadcastConfig::from_file(&dir.path().join("missing.toml")),
            Err(BroadcastConfigError::Io(_))
        ));
    }
}
