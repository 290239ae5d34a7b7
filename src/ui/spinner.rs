use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::output;

const TICKS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// A terminal spinner shown while a request is in flight.
///
/// Draws to stderr, stays hidden in quiet mode, and clears itself when
/// dropped.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Starts a spinner showing `message` and the elapsed time.
    pub fn new(message: &str) -> Self {
        if output::is_quiet() {
            return Self {
                progress_bar: ProgressBar::hidden(),
            };
        }

        let progress_bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(&TICKS)
            .template("{spinner} {msg} {elapsed}")
        {
            progress_bar.set_style(style);
        }
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(TICK_INTERVAL);

        Self { progress_bar }
    }

    /// Runs `f` with a spinner showing `message`, clearing it afterwards.
    pub fn wrap<R>(message: &str, f: impl FnOnce() -> R) -> R {
        let spinner = Self::new(message);
        let result = f();
        spinner.stop();
        result
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
