//! Permission gate use case
//!
//! Resolves microphone authorization before the recorder is presented.
//! Denial is terminal for the session; the gate never re-checks or
//! retries after a result.

use crate::domain::permission::PermissionState;

use super::ports::MicrophoneAccess;

/// Which screen the UI should present after the gate resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Access granted, show the recorder
    Recorder,
    /// Access denied (or unresolvable), show the settings redirect
    SettingsRedirect,
}

/// Permission gate. Leaf dependency: knows nothing about the recorder.
pub struct PermissionGate<A: MicrophoneAccess> {
    access: A,
}

impl<A: MicrophoneAccess> PermissionGate<A> {
    /// Create a gate over the platform permission port
    pub fn new(access: A) -> Self {
        Self { access }
    }

    /// Resolve the gate once.
    ///
    /// Reads the current status; only an undetermined status triggers a
    /// request to the platform. Anything short of a grant routes to the
    /// settings-redirect screen, fail closed.
    pub async fn resolve(&self) -> (PermissionState, Screen) {
        let state = match self.access.status() {
            PermissionState::Undetermined => self.access.request().await,
            resolved => resolved,
        };

        let screen = match state {
            PermissionState::Granted => Screen::Recorder,
            PermissionState::Denied | PermissionState::Undetermined => Screen::SettingsRedirect,
        };

        (state, screen)
    }
}
