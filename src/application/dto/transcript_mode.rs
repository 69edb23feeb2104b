/// When to show the question/answer transcript at the end of a session
///
/// Both the CLI (inbound adapter) and the console loop need to understand
/// this, so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranscriptMode {
    /// Ask the user before exiting (default)
    #[default]
    Ask,
    /// Always present the transcript
    Always,
    /// Never present the transcript
    Never,
}

impl std::str::FromStr for TranscriptMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ask" => Ok(TranscriptMode::Ask),
            "always" | "yes" => Ok(TranscriptMode::Always),
            "never" | "no" => Ok(TranscriptMode::Never),
            _ => Err(format!(
                "Invalid transcript mode: {}. Please specify 'ask', 'always' or 'never'",
                s
            )),
        }
    }
}

impl std::fmt::Display for TranscriptMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptMode::Ask => write!(f, "ask"),
            TranscriptMode::Always => write!(f, "always"),
            TranscriptMode::Never => write!(f, "never"),
        }
    }
}
