use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the chat session ended normally
    Success = 0,
    /// Application error (missing credentials, invalid config, LLM failure, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the chat assistant.
///
/// The vulnerability query path never produces these; its failures are
/// folded into structured summaries instead. These cover the outer shell:
/// credentials, the language-model service, and file output.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Missing credential: {name}\n\n💡 Hint: {hint}")]
    MissingCredential { name: String, hint: String },

    #[error("Language model API responded with status {status}\nDetails: {details}\n\n💡 Hint: Check your API key and model name, or wait a moment and retry")]
    LlmApiError { status: u16, details: String },

    #[error("Language model returned an unreadable response\nDetails: {details}")]
    LlmResponseError { details: String },

    /// Validation error for requests and builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
