//! Spinner reporting solve attempts while the driver retries

use crate::algorithm::collapse::NoSolution;
use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Displays the attempt count and the most recent failure
pub struct AttemptProgress {
    bar: ProgressBar,
    failures: usize,
}

impl AttemptProgress {
    /// Create a visible spinner for a `width × height` board
    pub fn new(width: usize, height: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(format!("{width}x{height}"));
        bar.set_message("attempt 1");
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { bar, failures: 0 }
    }

    /// Create a progress reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            failures: 0,
        }
    }

    /// Record a failed attempt
    pub fn record_failure(&mut self, attempt: usize, failure: &NoSolution) {
        self.failures += 1;
        self.bar.set_message(format!(
            "attempt {}: no solution ({failure})",
            attempt + 1
        ));
    }

    /// Number of failed attempts recorded
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Current status line
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Stop the spinner after a solution
    pub fn finish_solved(&self, attempts: usize) {
        self.bar
            .finish_with_message(format!("solved after {attempts} attempt(s)"));
    }

    /// Stop the spinner after giving up
    pub fn abandon(&self) {
        self.bar
            .abandon_with_message(format!("gave up after {} attempt(s)", self.failures));
    }
}
