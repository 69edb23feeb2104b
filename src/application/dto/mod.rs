/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod answer_response;
mod question_request;
mod transcript_mode;

pub use answer_response::AnswerResponse;
pub use question_request::QuestionRequest;
pub use transcript_mode::TranscriptMode;
