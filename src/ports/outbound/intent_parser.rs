use crate::nvd_query::domain::{ChatMessage, ToolCall};
use crate::shared::Result;
use serde::Serialize;
use serde_json::Value;

/// A capability the language model may ask to run locally
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of the arguments object
    pub parameters: Value,
}

/// What the language model sent back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// A plain answer
    Text(String),
    /// One or more tool invocations, with any text that came alongside
    ToolCalls {
        content: String,
        calls: Vec<ToolCall>,
    },
}

impl ModelReply {
    /// The text part of the reply, empty when only tools were requested
    pub fn content(&self) -> &str {
        match self {
            ModelReply::Text(text) => text,
            ModelReply::ToolCalls { content, .. } => content,
        }
    }

    /// The assistant message to record in the conversation
    pub fn to_message(&self) -> ChatMessage {
        match self {
            ModelReply::Text(text) => ChatMessage::assistant(text.clone()),
            ModelReply::ToolCalls { content, calls } => ChatMessage::Assistant {
                content: content.clone(),
                tool_calls: calls.clone(),
            },
        }
    }
}

/// IntentParser port for the hosted language model
///
/// Any provider that can take a conversation and optionally a tool set,
/// and answer with either text or tool invocations, can implement it.
pub trait IntentParser {
    /// Sends the conversation and returns the model's reply
    ///
    /// # Arguments
    /// * `conversation` - Ordered messages so far
    /// * `tools` - Tools the model may invoke; empty to force a text answer
    ///
    /// # Errors
    /// Returns an error if the service cannot be reached, rejects the
    /// request, or returns a reply that cannot be decoded.
    fn respond(&self, conversation: &[ChatMessage], tools: &[ToolDefinition]) -> Result<ModelReply>;

    /// Model identifier, for diagnostics
    fn model_name(&self) -> &str;
}
