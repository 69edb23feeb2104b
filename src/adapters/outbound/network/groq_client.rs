use crate::nvd_query::domain::{argument_map_from_json, ChatMessage, ToolCall};
use crate::ports::outbound::{IntentParser, ModelReply, ToolDefinition};
use crate::shared::error::ChatError;
use crate::shared::Result;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Groq chat-completions client
///
/// Speaks the OpenAI-compatible `/chat/completions` API with tool calling,
/// so any endpoint implementing that API can be targeted through the base URL.
///
/// # Security
/// - Uses the reqwest blocking client's default timeout (30 seconds)
/// - Does not retry failed requests
pub struct GroqChatClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqChatClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.groq.com/openai/v1";
    pub const DEFAULT_MODEL: &'static str = "llama-3.1-8b-instant";

    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nvd-chat/{}", version);
        let client = Client::builder()
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request<'a>(
        &'a self,
        conversation: &'a [ChatMessage],
        tools: &'a [ToolDefinition],
    ) -> CompletionRequest<'a> {
        let tools: Vec<WireTool<'a>> = tools
            .iter()
            .map(|tool| WireTool {
                kind: "function",
                function: tool,
            })
            .collect();
        let tool_choice = if tools.is_empty() { None } else { Some("auto") };

        CompletionRequest {
            model: &self.model,
            messages: conversation.iter().map(WireMessage::from).collect(),
            tools,
            tool_choice,
        }
    }
}

impl IntentParser for GroqChatClient {
    fn respond(&self, conversation: &[ChatMessage], tools: &[ToolDefinition]) -> Result<ModelReply> {
        let request = self.build_request(conversation, tools);
        tracing::debug!(
            model = %self.model,
            messages = conversation.len(),
            tools = tools.len(),
            "sending chat completion"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(ChatError::LlmApiError {
                status: status.as_u16(),
                details: body,
            }
            .into());
        }

        let completion: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| ChatError::LlmResponseError {
                details: e.to_string(),
            })?;

        parse_reply(completion)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn parse_reply(completion: CompletionResponse) -> Result<ModelReply> {
    let message = completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| ChatError::LlmResponseError {
            details: "response contained no choices".to_string(),
        })?;

    let content = message.content.unwrap_or_default();
    let calls: Vec<ToolCall> = message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|call| {
            // Arguments arrive as a JSON document encoded in a string.
            let arguments = match serde_json::from_str::<Value>(&call.function.arguments) {
                Ok(value) => argument_map_from_json(&value),
                Err(e) => {
                    tracing::warn!(
                        tool = %call.function.name,
                        error = %e,
                        "tool call arguments were not valid JSON"
                    );
                    Default::default()
                }
            };
            ToolCall::new(call.id, call.function.name, arguments)
        })
        .collect();

    if calls.is_empty() {
        Ok(ModelReply::Text(content))
    } else {
        Ok(ModelReply::ToolCalls { content, calls })
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
}

#[derive(Serialize)]
struct WireTool<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: &'a ToolDefinition,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<WireToolCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> WireMessage<'a> {
    fn plain(role: &'static str, content: &'a str) -> Self {
        Self {
            role,
            content,
            tool_calls: Vec::new(),
            tool_call_id: None,
            name: None,
        }
    }
}

impl<'a> From<&'a ChatMessage> for WireMessage<'a> {
    fn from(message: &'a ChatMessage) -> Self {
        match message {
            ChatMessage::System { content } => Self::plain("system", content),
            ChatMessage::User { content } => Self::plain("user", content),
            ChatMessage::Assistant {
                content,
                tool_calls,
            } => WireMessage {
                tool_calls: tool_calls.iter().map(WireToolCall::from).collect(),
                ..Self::plain("assistant", content)
            },
            ChatMessage::Tool {
                call_id,
                name,
                content,
            } => WireMessage {
                tool_call_id: Some(call_id.as_str()),
                name: Some(name.as_str()),
                ..Self::plain("tool", content)
            },
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type", default = "function_kind")]
    kind: String,
    function: WireFunctionCall,
}

fn function_kind() -> String {
    "function".to_string()
}

impl From<&ToolCall> for WireToolCall {
    fn from(call: &ToolCall) -> Self {
        Self {
            id: call.id.clone(),
            kind: function_kind(),
            function: WireFunctionCall {
                name: call.name.clone(),
                arguments: serde_json::to_string(&call.arguments)
                    .unwrap_or_else(|_| "{}".to_string()),
            },
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    /// JSON-encoded arguments object
    arguments: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<WireToolCall>>,
}
