/// Use cases module containing application business logic orchestration
mod answer_question;

pub use answer_question::AnswerQuestionUseCase;
