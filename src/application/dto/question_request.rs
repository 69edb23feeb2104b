/// QuestionRequest - One user question for the answering use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    /// The question exactly as typed
    pub question: String,
}

impl QuestionRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}
