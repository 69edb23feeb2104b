use crate::application::dto::{QuestionRequest, TranscriptMode};
use crate::ports::inbound::QuestionAnsweringPort;
use crate::ports::outbound::{OutputPresenter, ProgressReporter};
use crate::shared::Result;
use std::io::{BufRead, Write};

const QUESTION_PROMPT: &str = "What questions do you have regarding the NVD? (Type 'q' to quit)";
const CONTINUE_PROMPT: &str = "Any other questions? (Type 'y' or 'n')";
const TRANSCRIPT_PROMPT: &str = "Would you like a copy of the chat history? (Type 'y' or 'n')";
const SEPARATOR: &str = "--------------------";
const TRANSCRIPT_RULE: &str = "------------------------------";

/// ConsoleChat - Interactive read loop driving the question answering port
///
/// Questions are read line by line from `input`; answers and prompts go to
/// `output`. Reading end-of-input behaves like typing `q`.
pub struct ConsoleChat<R: BufRead, W: Write> {
    input: R,
    output: W,
    transcript_mode: TranscriptMode,
}

impl<R: BufRead, W: Write> ConsoleChat<R, W> {
    pub fn new(input: R, output: W, transcript_mode: TranscriptMode) -> Self {
        Self {
            input,
            output,
            transcript_mode,
        }
    }

    /// Writes `text` on its own line and reads one line of reply
    ///
    /// Returns `None` at end of input. The trailing newline is removed.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Runs the session until the user quits, then handles the transcript
    pub fn run<Q>(
        &mut self,
        port: &mut Q,
        presenter: &dyn OutputPresenter,
        reporter: &dyn ProgressReporter,
    ) -> Result<()>
    where
        Q: QuestionAnsweringPort,
    {
        loop {
            let Some(question) = self.prompt(QUESTION_PROMPT)? else {
                break;
            };
            let question = question.trim();
            if question == "q" {
                break;
            }
            if question.is_empty() {
                continue;
            }

            writeln!(self.output, "{}", SEPARATOR)?;
            match port.answer(QuestionRequest::new(question)) {
                Ok(response) => writeln!(self.output, "{}", response.answer)?,
                Err(e) => {
                    tracing::error!(error = %e, "failed to answer question");
                    reporter.report_error(&format!("❌ Could not answer that question: {}", e));
                }
            }

            match self.prompt(CONTINUE_PROMPT)? {
                Some(reply) if reply.trim() == "y" => {
                    writeln!(self.output, "{}\n", SEPARATOR)?;
                }
                _ => break,
            }
        }

        let history = port.history();
        if history.is_empty() || !self.wants_transcript()? {
            return Ok(());
        }

        presenter.present(&format!(
            "{rule}{}{rule}\n",
            history.transcript(),
            rule = TRANSCRIPT_RULE
        ))
    }

    fn wants_transcript(&mut self) -> Result<bool> {
        match self.transcript_mode {
            TranscriptMode::Always => Ok(true),
            TranscriptMode::Never => Ok(false),
            TranscriptMode::Ask => Ok(matches!(
                self.prompt(TRANSCRIPT_PROMPT)?,
                Some(reply) if reply.trim() == "y"
            )),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
