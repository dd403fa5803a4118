//! MicMemo - minimal tap-to-record voice memo recorder
//!
//! This crate provides the core functionality for recording a voice memo
//! from the microphone to a single file and playing it back.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: State snapshot, event reducer, permission states, errors
//! - **Application**: The recorder controller, the permission gate, and
//!   port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (cpal capture, rodio
//!   playback, device-probe permission, XDG config)
//! - **CLI**: Argument parsing, the interactive key loop, and the two
//!   terminal screens

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
