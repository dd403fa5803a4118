//! Playback port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("Failed to start playback: {0}")]
    StartFailed(String),

    #[error("Failed to read recording: {0}")]
    Unreadable(String),

    #[error("No audio output device available: {0}")]
    NoOutputDevice(String),
}

/// Port for rendering a recorded file as audio.
///
/// Natural end of media is reported as
/// [`BackendEvent::PlaybackFinished`](super::BackendEvent) on the backend
/// event channel, not through this trait.
#[async_trait]
pub trait PlaybackBackend: Send + Sync {
    /// Begin playing the file at `source`.
    async fn play(&self, source: &Path) -> Result<(), PlaybackError>;

    /// Halt playback. No event is emitted for a user-initiated stop.
    async fn stop(&self) -> Result<(), PlaybackError>;

    /// Check if a playback session is active
    fn is_active(&self) -> bool;
}
