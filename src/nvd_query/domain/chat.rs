use super::query_arguments::ArgumentMap;
use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

/// A tool invocation requested by the language model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCall {
    /// Provider-assigned id echoed back in the tool result
    pub id: String,
    pub name: String,
    pub arguments: ArgumentMap,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: ArgumentMap) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }
}

/// One message in a conversation with the language model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage {
    System {
        content: String,
    },
    User {
        content: String,
    },
    Assistant {
        content: String,
        tool_calls: Vec<ToolCall>,
    },
    Tool {
        call_id: String,
        name: String,
        content: String,
    },
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage::System {
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage::User {
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage::Assistant {
            content: content.into(),
            tool_calls: Vec::new(),
        }
    }
}

/// Every message exchanged while answering one question
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub question: String,
    pub messages: Vec<ChatMessage>,
    pub answer: String,
    pub asked_at: DateTime<Local>,
}

/// Process-lifetime record of the conversation
#[derive(Debug, Clone, Serialize)]
pub struct ChatHistory {
    session_id: Uuid,
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            turns: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Human-readable question/answer log
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for turn in &self.turns {
            out.push_str(&format!("\n***You: {}\n", turn.question));
            out.push_str(&format!("***Chatbot: {}\n", turn.answer));
        }
        out
    }
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new()
    }
}
