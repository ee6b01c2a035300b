//! Spinner display for catalog scans
//!
//! Draws to stderr, so command output on stdout stays clean and the
//! spinner disappears entirely when stderr is not a terminal.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the catalog directory is being scanned
pub struct ScanSpinner {
    pb: ProgressBar,
}

impl ScanSpinner {
    /// Start a spinner with the given message
    pub fn start(message: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));

        Self { pb }
    }

    /// Stop the spinner and erase it
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error, leaving the last message visible
    pub fn abandon(self) {
        self.pb.abandon();
    }
}
