//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with cpal, rodio, and the filesystem.

pub mod capture;
pub mod config;
pub mod permission;
pub mod playback;

// Re-export adapters
pub use capture::CpalWavCapture;
pub use config::XdgConfigStore;
pub use permission::DeviceProbeAccess;
pub use playback::RodioPlayback;
