/// ProgressReporter port for user-facing status output
///
/// Keeps status lines and diagnostics off stdout, where the answers go.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Signals that a slow remote call has started
    fn start_waiting(&self, message: &str);

    /// Signals that the slow remote call has finished
    fn finish_waiting(&self);
}
