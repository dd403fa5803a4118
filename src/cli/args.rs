//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// MicMemo - minimal tap-to-record voice memo recorder
#[derive(Parser, Debug)]
#[command(name = "mic-memo")]
#[command(version)]
#[command(about = "Record a voice memo from the microphone and play it back")]
#[command(long_about = None)]
pub struct Cli {
    /// Output path for the recording (overwritten on each new recording)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<String>,

    /// Capture sample rate in Hz
    #[arg(long, value_name = "HZ")]
    pub sample_rate: Option<u32>,

    /// Capture channel count (1 or 2)
    #[arg(long, value_name = "N")]
    pub channels: Option<u16>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["output", "sample_rate", "channels"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_are_valid() {
        assert!(is_valid_config_key("output"));
        assert!(is_valid_config_key("sample_rate"));
        assert!(is_valid_config_key("channels"));
    }

    #[test]
    fn unknown_key_is_invalid() {
        assert!(!is_valid_config_key("api_key"));
        assert!(!is_valid_config_key(""));
    }
}
