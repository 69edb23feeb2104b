use crate::nvd_query::domain::QueryArguments;

/// AnswerResponse - Result of answering one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResponse {
    /// Final answer text from the language model
    pub answer: String,
    /// Search arguments after sanitizing, one entry per NVD search run
    pub interpreted_arguments: Vec<QueryArguments>,
}

impl AnswerResponse {
    pub fn new(answer: String, interpreted_arguments: Vec<QueryArguments>) -> Self {
        Self {
            answer,
            interpreted_arguments,
        }
    }
}
