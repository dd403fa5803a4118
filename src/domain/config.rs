//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::recording::{CaptureSettings, DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE};

/// File name of the single, overwritten recording
pub const DEFAULT_FILE_NAME: &str = "memo.wav";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output path for the recording; overwritten on each new recording
    pub output: Option<String>,
    /// Capture sample rate in Hz
    pub sample_rate: Option<u32>,
    /// Capture channel count (1 or 2)
    pub channels: Option<u16>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            output: Some(Self::default_output().to_string_lossy().into_owned()),
            sample_rate: Some(DEFAULT_SAMPLE_RATE),
            channels: Some(DEFAULT_CHANNELS),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            output: other.output.or(self.output),
            sample_rate: other.sample_rate.or(self.sample_rate),
            channels: other.channels.or(self.channels),
        }
    }

    /// The fixed output path under the app's data directory
    fn default_output() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mic-memo")
            .join(DEFAULT_FILE_NAME)
    }

    /// Get the output path, or the default location if not set
    pub fn output_or_default(&self) -> PathBuf {
        self.output
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_output)
    }

    /// Get capture settings, falling back to defaults for unset or
    /// out-of-range values
    pub fn settings_or_default(&self) -> CaptureSettings {
        let sample_rate = self.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE);
        let channels = self.channels.unwrap_or(DEFAULT_CHANNELS);
        CaptureSettings::new(sample_rate, channels).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::empty();
        let settings = config.settings_or_default();
        assert_eq!(settings.sample_rate(), DEFAULT_SAMPLE_RATE);
        assert_eq!(settings.channels(), DEFAULT_CHANNELS);
        assert!(config
            .output_or_default()
            .ends_with(PathBuf::from("mic-memo").join(DEFAULT_FILE_NAME)));
    }

    #[test]
    fn merge_prefers_other() {
        let base = AppConfig {
            output: Some("/tmp/a.wav".into()),
            sample_rate: Some(16_000),
            channels: None,
        };
        let over = AppConfig {
            output: Some("/tmp/b.wav".into()),
            sample_rate: None,
            channels: Some(1),
        };
        let merged = base.merge(over);
        assert_eq!(merged.output.as_deref(), Some("/tmp/b.wav"));
        assert_eq!(merged.sample_rate, Some(16_000));
        assert_eq!(merged.channels, Some(1));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = AppConfig {
            output: None,
            sample_rate: Some(0),
            channels: Some(9),
        };
        let settings = config.settings_or_default();
        assert_eq!(settings.sample_rate(), DEFAULT_SAMPLE_RATE);
        assert_eq!(settings.channels(), DEFAULT_CHANNELS);
    }
}
