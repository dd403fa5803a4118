//! Application layer - Use cases and port interfaces
//!
//! Contains the core operations and trait definitions
//! for external system interactions.

pub mod controller;
pub mod gate;
pub mod ports;

// Re-export use cases
pub use controller::RecorderController;
pub use gate::{PermissionGate, Screen};
