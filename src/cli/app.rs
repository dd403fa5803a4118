//! Interactive recorder application
//!
//! Resolves the permission gate, then runs a single event loop over stdin
//! keys, backend events, and Ctrl-C. All state changes happen on this
//! loop; backend threads only talk to it through the event channel.

use std::path::PathBuf;
use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::events;
use crate::application::{PermissionGate, RecorderController, Screen};
use crate::domain::config::AppConfig;
use crate::domain::recording::CaptureSettings;
use crate::infrastructure::{CpalWavCapture, DeviceProbeAccess, RodioPlayback, XdgConfigStore};

use super::presenter::Presenter;

/// Exit code for runtime errors
pub const EXIT_ERROR: u8 = 1;

/// Options for the interactive recorder
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Fixed output path, overwritten per recording
    pub output: PathBuf,
    /// Capture settings
    pub settings: CaptureSettings,
}

/// Load config file and merge with CLI config (CLI takes precedence)
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    use crate::application::ports::ConfigStore;

    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            AppConfig::empty()
        }
    };

    file_config.merge(cli_config)
}

/// Run the interactive recorder
pub async fn run(options: RunOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Permission gate resolves before anything else is constructed
    let gate = PermissionGate::new(DeviceProbeAccess::new());
    let (permission, screen) = gate.resolve().await;

    if screen == Screen::SettingsRedirect {
        presenter.permission_screen();
        return ExitCode::from(EXIT_ERROR);
    }

    let (events_tx, mut events_rx) = events::channel();
    let capture = CpalWavCapture::new(events_tx.clone());
    let playback = RodioPlayback::new(events_tx);
    let controller = RecorderController::new(capture, playback, options.output, options.settings);
    controller.permission_resolved(permission);

    presenter.recorder_screen();
    presenter.status(&controller.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let input = match line {
                    Ok(Some(input)) => input,
                    Ok(None) => break, // stdin closed
                    Err(e) => {
                        log::warn!("Failed to read input: {}", e);
                        break;
                    }
                };

                match input.trim() {
                    "r" => {
                        if controller.snapshot().is_recording {
                            controller.stop_recording().await;
                        } else {
                            controller.start_recording().await;
                        }
                    }
                    "p" => {
                        if controller.snapshot().is_playing {
                            controller.stop_playing().await;
                        } else {
                            controller.play_recording().await;
                        }
                    }
                    "q" => break,
                    "" => {}
                    other => {
                        presenter.finish_spinner();
                        presenter.info(&format!("Unknown key: {}", other));
                    }
                }
                presenter.status(&controller.snapshot());
            }

            Some(event) = events_rx.recv() => {
                controller.handle_backend_event(event);
                presenter.status(&controller.snapshot());
            }

            _ = tokio::signal::ctrl_c() => break,
        }
    }

    // Halt any in-flight sessions before leaving
    controller.stop_playing().await;
    controller.stop_recording().await;
    presenter.finish_spinner();

    let snapshot = controller.snapshot();
    if let Some(path) = snapshot.last_recording {
        presenter.success(&format!("Recording saved to {}", path.display()));
    }

    ExitCode::SUCCESS
}
