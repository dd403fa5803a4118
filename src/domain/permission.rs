//! Microphone permission states

use std::fmt;

/// Microphone authorization state, resolved once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PermissionState {
    /// Microphone access has been granted
    Granted,
    /// Microphone access has been denied; terminal for this session
    Denied,
    /// No probe has been made yet
    #[default]
    Undetermined,
}

impl PermissionState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Undetermined => "undetermined",
        }
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
