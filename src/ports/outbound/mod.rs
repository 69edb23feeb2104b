/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (NVD, the language model, console).
pub mod intent_parser;
pub mod output_presenter;
pub mod progress_reporter;
pub mod vulnerability_repository;

pub use intent_parser::{IntentParser, ModelReply, ToolDefinition};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use vulnerability_repository::VulnerabilityRepository;
