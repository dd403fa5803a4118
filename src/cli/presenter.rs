//! CLI presenter for the two screens and status output

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::session::Snapshot;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    /// The settings-redirect screen shown when access is denied.
    /// There is no automatic recovery; the app must be restarted after
    /// the microphone is enabled.
    pub fn permission_screen(&self) {
        println!();
        println!("{}", "Microphone Access Required".bold());
        println!("No usable microphone was found.");
        println!(
            "Enable one in your system sound settings, then restart {}.",
            "mic-memo".cyan()
        );
        println!();
    }

    /// The recorder screen header with the key bindings
    pub fn recorder_screen(&self) {
        println!();
        println!("{}", "MicMemo".bold());
        println!(
            "  {} record / stop    {} play / stop    {} quit",
            "[r]".cyan(),
            "[p]".cyan(),
            "[q]".cyan()
        );
        println!("  (press the key, then Enter)");
        println!();
    }

    /// Render the current state, driving the activity spinner.
    ///
    /// The play control is only offered once a recording exists.
    pub fn status(&mut self, snapshot: &Snapshot) {
        let message = match (snapshot.is_recording, snapshot.is_playing) {
            (true, true) => format!("{} recording + playing", "●".red()),
            (true, false) => format!("{} recording", "●".red()),
            (false, true) => format!("{} playing", "▶".green()),
            (false, false) => String::new(),
        };

        if message.is_empty() {
            self.finish_spinner();
            if snapshot.has_recording() {
                self.info("idle: [r] to record again, [p] to play back");
            } else {
                self.info("idle: [r] to record");
            }
            return;
        }

        match &self.spinner {
            Some(spinner) => spinner.set_message(message),
            None => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message(message);
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));
                self.spinner = Some(spinner);
            }
        }
    }

    /// Stop and clear the activity spinner if one is running
    pub fn finish_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
