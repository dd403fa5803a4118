//! Capture port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::recording::CaptureSettings;

/// Capture errors
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    #[error("Failed to start capture: {0}")]
    StartFailed(String),

    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    #[error("Failed to write recording: {0}")]
    WriteFailed(String),

    #[error("No audio input device available")]
    NoInputDevice,
}

/// Port for microphone capture.
///
/// At most one capture session is active at a time; `start` while active
/// is an error so the caller can guarantee no duplicate capture handles.
#[async_trait]
pub trait CaptureBackend: Send + Sync {
    /// Begin capturing to `output`, overwriting any previous file there.
    ///
    /// Failures after a successful start are reported as
    /// [`BackendEvent::CaptureFailed`](super::BackendEvent) on the
    /// backend event channel.
    async fn start(&self, output: &Path, settings: CaptureSettings) -> Result<(), CaptureError>;

    /// Halt capture and finalize the output file. Error if not active.
    async fn stop(&self) -> Result<(), CaptureError>;

    /// Check if a capture session is active
    fn is_active(&self) -> bool;
}
