//! Microphone permission port interface

use async_trait::async_trait;

use crate::domain::permission::PermissionState;

/// Port for the platform microphone authorization API.
#[async_trait]
pub trait MicrophoneAccess: Send + Sync {
    /// Current authorization status, without prompting the platform.
    fn status(&self) -> PermissionState;

    /// Ask the platform for microphone access.
    ///
    /// # Returns
    /// The resolved state; never `Undetermined` on a well-behaved
    /// platform, but callers must treat it as a denial if it is.
    async fn request(&self) -> PermissionState;
}
