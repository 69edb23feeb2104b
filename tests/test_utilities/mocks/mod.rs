/// Mock implementations for testing
mod mock_intent_parser;
mod mock_progress_reporter;
mod mock_vulnerability_repository;

pub use mock_intent_parser::MockIntentParser;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_vulnerability_repository::{nvd_page, MockVulnerabilityRepository};
