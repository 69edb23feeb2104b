//! nvd-chat - Plain-language questions over the National Vulnerability Database
//!
//! This library turns a user's question into NVD CVE API searches through a
//! hosted language model, shrinks the results to fit the model's budget, and
//! hands them back for a final answer. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`nvd_query`): Query arguments, date rules, URL assembly
//!   and result sampling
//! - **Application Layer** (`application`): The search tool, use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities, error types and logging
//!
//! # Example
//!
//! ```no_run
//! use nvd_chat::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let intent_parser = GroqChatClient::new(
//!     "groq-key",
//!     GroqChatClient::DEFAULT_MODEL,
//!     GroqChatClient::DEFAULT_BASE_URL,
//! )?;
//! let repository = NvdClient::new("nvd-key")?;
//! let search_tool = NvdSearchTool::new(repository, QueryAssembler::new(), SampleBudget::default());
//!
//! // Create use case
//! let mut use_case =
//!     AnswerQuestionUseCase::new(intent_parser, search_tool, StderrProgressReporter::new());
//!
//! // Execute
//! let response = use_case.answer(QuestionRequest::new("What is CVE-2014-0160?"))?;
//! println!("{}", response.answer);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod nvd_query;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::ConsoleChat;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::network::{GroqChatClient, NvdClient};
    pub use crate::application::dto::{AnswerResponse, QuestionRequest, TranscriptMode};
    pub use crate::application::tools::NvdSearchTool;
    pub use crate::application::use_cases::AnswerQuestionUseCase;
    pub use crate::nvd_query::domain::{
        ChatHistory, ChatMessage, QueryArguments, ToolCall, VulnerabilitySummary,
    };
    pub use crate::nvd_query::policies::{has_date_mention, sanitize_arguments};
    pub use crate::nvd_query::services::{QueryAssembler, SampleBudget};
    pub use crate::ports::inbound::QuestionAnsweringPort;
    pub use crate::ports::outbound::{
        IntentParser, ModelReply, OutputPresenter, ProgressReporter, ToolDefinition,
        VulnerabilityRepository,
    };
    pub use crate::shared::Result;
}
