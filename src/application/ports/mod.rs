//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod capture;
pub mod config;
pub mod events;
pub mod permission;
pub mod playback;

// Re-export common types
pub use capture::{CaptureBackend, CaptureError};
pub use config::ConfigStore;
pub use events::{BackendEvent, BackendEventReceiver, BackendEventSender};
pub use permission::MicrophoneAccess;
pub use playback::{PlaybackBackend, PlaybackError};
