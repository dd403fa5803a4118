//! Backend event channel
//!
//! Adapters report asynchronous outcomes as messages on a channel instead
//! of delegate callbacks. The controller consumes them on the UI event
//! loop, so backend threads never mutate application state directly.

use tokio::sync::mpsc;

/// Events emitted by capture/playback backends after a successful start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    /// Playback reached the natural end of the recording
    PlaybackFinished,
    /// The capture stream failed mid-session
    CaptureFailed(String),
}

/// Sender half handed to backend adapters
pub type BackendEventSender = mpsc::UnboundedSender<BackendEvent>;

/// Receiver half consumed by the UI event loop
pub type BackendEventReceiver = mpsc::UnboundedReceiver<BackendEvent>;

/// Create the backend event channel
pub fn channel() -> (BackendEventSender, BackendEventReceiver) {
    mpsc::unbounded_channel()
}
