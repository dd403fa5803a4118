//! Device-probe permission adapter
//!
//! Desktop platforms have no microphone authorization dialog; access is
//! probed by asking cpal for the default input device and a usable input
//! config. A successful probe maps to granted, a failed probe to denied.
//! The result is cached for the life of the process.

use std::sync::atomic::{AtomicU8, Ordering};

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait};

use crate::application::ports::MicrophoneAccess;
use crate::domain::permission::PermissionState;

const STATE_UNDETERMINED: u8 = 0;
const STATE_GRANTED: u8 = 1;
const STATE_DENIED: u8 = 2;

/// Microphone access adapter probing the default cpal input device
pub struct DeviceProbeAccess {
    state: AtomicU8,
}

impl DeviceProbeAccess {
    /// Create a new probe in the undetermined state
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(STATE_UNDETERMINED),
        }
    }

    fn probe() -> PermissionState {
        let host = cpal::default_host();
        let Some(device) = host.default_input_device() else {
            return PermissionState::Denied;
        };
        match device.default_input_config() {
            Ok(_) => PermissionState::Granted,
            Err(e) => {
                log::warn!("Input device probe failed: {}", e);
                PermissionState::Denied
            }
        }
    }

    fn encode(state: PermissionState) -> u8 {
        match state {
            PermissionState::Undetermined => STATE_UNDETERMINED,
            PermissionState::Granted => STATE_GRANTED,
            PermissionState::Denied => STATE_DENIED,
        }
    }
}

impl Default for DeviceProbeAccess {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MicrophoneAccess for DeviceProbeAccess {
    fn status(&self) -> PermissionState {
        match self.state.load(Ordering::SeqCst) {
            STATE_GRANTED => PermissionState::Granted,
            STATE_DENIED => PermissionState::Denied,
            _ => PermissionState::Undetermined,
        }
    }

    async fn request(&self) -> PermissionState {
        // Device enumeration can block, keep it off the event loop
        let resolved = tokio::task::spawn_blocking(Self::probe)
            .await
            .unwrap_or_else(|e| {
                log::warn!("Permission probe task failed: {}", e);
                PermissionState::Denied
            });

        self.state.store(Self::encode(resolved), Ordering::SeqCst);
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_undetermined() {
        let access = DeviceProbeAccess::new();
        assert_eq!(access.status(), PermissionState::Undetermined);
    }

    #[tokio::test]
    #[ignore = "Requires audio hardware"]
    async fn request_caches_result() {
        let access = DeviceProbeAccess::new();
        let resolved = access.request().await;
        assert_ne!(resolved, PermissionState::Undetermined);
        assert_eq!(access.status(), resolved);
    }
}
