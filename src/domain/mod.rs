//! Domain layer - State, events, and value objects

pub mod config;
pub mod error;
pub mod permission;
pub mod recording;
pub mod session;
