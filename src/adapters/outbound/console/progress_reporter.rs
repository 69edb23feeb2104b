use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing status lines
/// to stderr so they don't interfere with the answers on stdout.
/// Slow remote calls are shown with an indicatif spinner.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    const TICK_MILLIS: u64 = 100;

    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
    }

    /// Runs `print` with the spinner suspended so lines don't interleave
    fn print_around_spinner(&self, print: impl FnOnce()) {
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.suspend(print),
            None => print(),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print_around_spinner(|| eprintln!("{}", message));
    }

    fn report_error(&self, message: &str) {
        self.print_around_spinner(|| eprintln!("{}", message.red()));
    }

    fn start_waiting(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(Self::TICK_MILLIS));

        if let Some(previous) = self.spinner.replace(Some(spinner)) {
            previous.finish_and_clear();
        }
    }

    fn finish_waiting(&self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
