use crate::application::dto::{AnswerResponse, QuestionRequest};
use crate::nvd_query::domain::ChatHistory;
use crate::shared::Result;

/// QuestionAnsweringPort - Inbound port for the chat use case
///
/// This port defines what the console loop (or any other driver) needs:
/// answer one question at a time and expose the accumulated history.
pub trait QuestionAnsweringPort {
    /// Answers a single question, appending the turn to the history
    ///
    /// # Errors
    /// Returns an error if:
    /// - The question is empty
    /// - The language model service fails
    ///
    /// NVD failures are not errors; they reach the model as notices.
    fn answer(&mut self, request: QuestionRequest) -> Result<AnswerResponse>;

    /// All turns answered so far
    fn history(&self) -> &ChatHistory;
}
