use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts where the chat transcript is written (stdout, file).
pub trait OutputPresenter {
    /// Presents the content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is rejected by the security checks
    fn present(&self, content: &str) -> Result<()>;
}
