use crate::application::dto::{AnswerResponse, QuestionRequest};
use crate::application::prompts::system_prompt;
use crate::application::tools::{NvdSearchTool, NVD_SEARCH_TOOL_NAME};
use crate::nvd_query::domain::{
    ChatHistory, ChatMessage, ChatTurn, QueryArguments, ToolCall, VulnerabilitySummary,
};
use crate::nvd_query::policies::sanitize_arguments;
use crate::ports::inbound::QuestionAnsweringPort;
use crate::ports::outbound::{IntentParser, ModelReply, ProgressReporter, VulnerabilityRepository};
use crate::shared::error::ChatError;
use crate::shared::Result;
use chrono::Local;

/// Shown while the model and NVD are being queried
const WAITING_MESSAGE: &str = "Let me look through the records. This should take less than a minute...";

/// AnswerQuestionUseCase - Answers one question per call
///
/// A turn runs: parse intent with the search tool on offer, sanitize each
/// requested search's arguments against the question, run the searches,
/// then ask the model for a final answer over the results. Each completed
/// turn is appended to the session history.
///
/// # Type Parameters
/// * `P` - IntentParser implementation
/// * `R` - VulnerabilityRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct AnswerQuestionUseCase<P, R, PR>
where
    R: VulnerabilityRepository,
{
    intent_parser: P,
    search_tool: NvdSearchTool<R>,
    progress_reporter: PR,
    history: ChatHistory,
}

impl<P, R, PR> AnswerQuestionUseCase<P, R, PR>
where
    P: IntentParser,
    R: VulnerabilityRepository,
    PR: ProgressReporter,
{
    /// Creates a new AnswerQuestionUseCase with injected dependencies
    pub fn new(intent_parser: P, search_tool: NvdSearchTool<R>, progress_reporter: PR) -> Self {
        Self {
            intent_parser,
            search_tool,
            progress_reporter,
            history: ChatHistory::new(),
        }
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    fn run_turn(&mut self, question: &str) -> Result<(String, Vec<ChatMessage>, Vec<QueryArguments>)> {
        let mut messages = vec![
            ChatMessage::system(system_prompt(Local::now().date_naive())),
            ChatMessage::user(question),
        ];

        let reply = self
            .intent_parser
            .respond(&messages, &[self.search_tool.definition()])?;

        let (content, calls) = match reply {
            ModelReply::Text(text) => {
                // No search was wanted; the first reply is the answer.
                messages.push(ChatMessage::assistant(text.clone()));
                return Ok((text, messages, Vec::new()));
            }
            ModelReply::ToolCalls { content, calls } => (content, calls),
        };

        let calls: Vec<ToolCall> = calls
            .into_iter()
            .map(|mut call| {
                sanitize_arguments(&mut call.arguments, question);
                call
            })
            .collect();

        messages.push(ChatMessage::Assistant {
            content,
            tool_calls: calls.clone(),
        });

        let mut interpreted = Vec::new();
        for call in calls {
            let content = if call.name == NVD_SEARCH_TOOL_NAME {
                let args = QueryArguments::from_map(&call.arguments);
                let summary = self.search(&args);
                interpreted.push(args);
                summary.to_tool_content()
            } else {
                tracing::warn!(tool = %call.name, "model requested an unregistered tool");
                serde_json::json!({ "message": format!("Unknown tool: {}", call.name) })
                    .to_string()
            };

            messages.push(ChatMessage::Tool {
                call_id: call.id,
                name: call.name,
                content,
            });
        }

        let reply = self.intent_parser.respond(&messages, &[])?;
        messages.push(reply.to_message());
        let answer = reply.content().to_string();

        Ok((answer, messages, interpreted))
    }

    fn search(&mut self, args: &QueryArguments) -> VulnerabilitySummary {
        self.progress_reporter.report(&format!(
            "While I comb through the database, here's a summary for you of how I'm interpreting your query:\n{}",
            args
        ));

        let summary = self.search_tool.invoke(args);

        if let VulnerabilitySummary::Unavailable(notice) = &summary {
            if notice.should_report() {
                let reason = match notice.status {
                    Some(status) => format!("NVD API responded with code: {}", status),
                    None => notice.message.clone(),
                };
                self.progress_reporter.report_error(&reason);
            }
        }

        summary
    }
}

impl<P, R, PR> QuestionAnsweringPort for AnswerQuestionUseCase<P, R, PR>
where
    P: IntentParser,
    R: VulnerabilityRepository,
    PR: ProgressReporter,
{
    fn answer(&mut self, request: QuestionRequest) -> Result<AnswerResponse> {
        let question = request.question.trim();
        if question.is_empty() {
            return Err(ChatError::Validation {
                message: "question must not be empty".to_string(),
            }
            .into());
        }

        let asked_at = Local::now();
        self.progress_reporter.start_waiting(WAITING_MESSAGE);
        let outcome = self.run_turn(question);
        self.progress_reporter.finish_waiting();

        let (answer, messages, interpreted) = outcome?;
        tracing::debug!(
            messages = messages.len(),
            searches = interpreted.len(),
            "turn complete"
        );

        self.history.push(ChatTurn {
            question: question.to_string(),
            messages,
            answer: answer.clone(),
            asked_at,
        });

        Ok(AnswerResponse::new(answer, interpreted))
    }

    fn history(&self) -> &ChatHistory {
        &self.history
    }
}
