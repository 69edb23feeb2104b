pub mod chat;
pub mod date_range;
pub mod query_arguments;
pub mod result_sample;

pub use chat::{ChatHistory, ChatMessage, ChatTurn, ToolCall};
pub use date_range::{is_valid_range, DateRange};
pub use query_arguments::{argument_map_from_json, ArgumentMap, QueryArguments};
pub use result_sample::{NoMatches, ResultSample, ServiceNotice, VulnerabilitySummary};
