use nvd_chat::nvd_query::domain::ArgumentMap;
use nvd_chat::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock IntentParser that replays scripted replies and records every call
#[derive(Default, Clone)]
pub struct MockIntentParser {
    replies: Arc<Mutex<VecDeque<std::result::Result<ModelReply, String>>>>,
    pub conversations: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
    pub tool_names: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockIntentParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply requesting one search with the given arguments
    pub fn then_search(self, id: &str, args: &[(&str, &str)]) -> Self {
        let arguments: ArgumentMap = args
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.then_reply(ModelReply::ToolCalls {
            content: String::new(),
            calls: vec![ToolCall::new(id, "api-tool", arguments)],
        })
    }

    pub fn then_text(self, text: &str) -> Self {
        self.then_reply(ModelReply::Text(text.to_string()))
    }

    pub fn then_reply(self, reply: ModelReply) -> Self {
        self.replies.lock().unwrap().push_back(Ok(reply));
        self
    }

    pub fn then_failure(self, message: &str) -> Self {
        self.replies.lock().unwrap().push_back(Err(message.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.conversations.lock().unwrap().len()
    }

    pub fn conversation(&self, index: usize) -> Vec<ChatMessage> {
        self.conversations.lock().unwrap()[index].clone()
    }
}

impl IntentParser for MockIntentParser {
    fn respond(&self, conversation: &[ChatMessage], tools: &[ToolDefinition]) -> Result<ModelReply> {
        self.conversations.lock().unwrap().push(conversation.to_vec());
        self.tool_names
            .lock()
            .unwrap()
            .push(tools.iter().map(|t| t.name.clone()).collect());

        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => anyhow::bail!("{}", message),
            None => anyhow::bail!("Mock intent parser has no scripted reply left"),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
