//! Capture settings value object

use crate::domain::error::InvalidSettingsError;

/// Default sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default channel count (stereo)
pub const DEFAULT_CHANNELS: u16 = 2;

/// Validated capture configuration handed to the capture backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSettings {
    sample_rate: u32,
    channels: u16,
}

impl CaptureSettings {
    /// Create settings, validating ranges.
    ///
    /// Sample rate must be between 8 kHz and 192 kHz; channels must be
    /// 1 (mono) or 2 (stereo).
    pub fn new(sample_rate: u32, channels: u16) -> Result<Self, InvalidSettingsError> {
        if !(8_000..=192_000).contains(&sample_rate) {
            return Err(InvalidSettingsError {
                field: "sample_rate",
                value: sample_rate.to_string(),
            });
        }
        if !(1..=2).contains(&channels) {
            return Err(InvalidSettingsError {
                field: "channels",
                value: channels.to_string(),
            });
        }
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Channel count
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: DEFAULT_CHANNELS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = CaptureSettings::default();
        assert_eq!(settings.sample_rate(), 44_100);
        assert_eq!(settings.channels(), 2);
    }

    #[test]
    fn accepts_mono_16k() {
        let settings = CaptureSettings::new(16_000, 1).unwrap();
        assert_eq!(settings.sample_rate(), 16_000);
        assert_eq!(settings.channels(), 1);
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let err = CaptureSettings::new(0, 2).unwrap_err();
        assert_eq!(err.field, "sample_rate");
    }

    #[test]
    fn rejects_surround_channel_count() {
        let err = CaptureSettings::new(44_100, 6).unwrap_err();
        assert_eq!(err.field, "channels");
        assert!(err.to_string().contains("channels"));
    }
}
