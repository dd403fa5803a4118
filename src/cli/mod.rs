//! CLI layer - argument parsing, screens, and the interactive key loop

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use app::{run, RunOptions, EXIT_ERROR};
