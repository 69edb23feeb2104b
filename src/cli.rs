use clap::Parser;
use std::path::PathBuf;

use nvd_chat::application::dto::TranscriptMode;
use nvd_chat::config::SettingsOverrides;

/// Ask questions about the National Vulnerability Database in plain language
#[derive(Parser, Debug)]
#[command(name = "nvd-chat")]
#[command(version)]
#[command(
    about = "Ask questions about the National Vulnerability Database in plain language",
    long_about = "Ask questions about the National Vulnerability Database in plain language.\n\n\
                  API keys are read from GROQ_API_KEY and NVD_API_KEY, or prompted for.\n\n\
                  This product uses the NVD API but is not endorsed or certified by the NVD."
)]
pub struct Args {
    /// Path to a YAML config file (defaults to ./nvd-chat.config.yml when present)
    #[arg(short, long, env = "NVD_CHAT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Language model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible chat completions API
    #[arg(long, value_name = "URL")]
    pub llm_base_url: Option<String>,

    /// NVD CVE API endpoint
    #[arg(long, value_name = "URL")]
    pub nvd_base_url: Option<String>,

    /// Seed for sampling search results, for repeatable sessions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of records handed to the model per search
    #[arg(long, value_name = "N")]
    pub max_samples: Option<usize>,

    /// Character budget for one search result
    #[arg(long, value_name = "CHARS")]
    pub char_budget: Option<usize>,

    /// Whether to show the chat history at exit: ask, always or never
    #[arg(long, value_name = "MODE")]
    pub transcript: Option<TranscriptMode>,

    /// Write the chat history to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub transcript_out: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Settings given on the command line, layered over the config file
    pub fn to_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            model: self.model.clone(),
            llm_base_url: self.llm_base_url.clone(),
            nvd_base_url: self.nvd_base_url.clone(),
            sample_seed: self.seed,
            max_samples: self.max_samples,
            char_budget: self.char_budget,
            transcript: self.transcript,
        }
    }
}
