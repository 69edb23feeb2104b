//! Configuration file and credential support for nvd-chat.
//!
//! Settings are layered: built-in defaults, then an optional
//! `nvd-chat.config.yml`, then command-line overrides. API keys are
//! resolved separately, from the environment or the console, and handed
//! to the adapters as a [`Credentials`] value.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::adapters::outbound::network::GroqChatClient;
use crate::application::dto::TranscriptMode;
use crate::nvd_query::services::{QueryAssembler, SampleBudget};
use crate::shared::error::ChatError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nvd-chat.config.yml";

pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";
pub const NVD_API_KEY_VAR: &str = "NVD_API_KEY";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub model: Option<String>,
    pub llm_base_url: Option<String>,
    pub nvd_base_url: Option<String>,
    pub sample_seed: Option<u64>,
    pub max_samples: Option<usize>,
    pub char_budget: Option<usize>,
    pub transcript: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "using discovered config file");
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(max_samples) = config.max_samples {
        validate_max_samples(max_samples)?;
    }
    if let Some(char_budget) = config.char_budget {
        validate_char_budget(char_budget)?;
    }
    if let Some(ref transcript) = config.transcript {
        if let Err(e) = transcript.parse::<TranscriptMode>() {
            bail!("Invalid config: transcript: {}", e);
        }
    }
    for (key, value) in [
        ("llm_base_url", &config.llm_base_url),
        ("nvd_base_url", &config.nvd_base_url),
    ] {
        if let Some(url) = value {
            validate_base_url(key, url)?;
        }
    }
    Ok(())
}

fn validate_max_samples(max_samples: usize) -> Result<()> {
    if max_samples == 0 {
        bail!(
            "Invalid config: max_samples must be at least 1.\n\n\
             💡 Hint: The default is {}.",
            SampleBudget::DEFAULT_MAX_SAMPLES
        );
    }
    Ok(())
}

fn validate_char_budget(char_budget: usize) -> Result<()> {
    if char_budget <= SampleBudget::DEFAULT_RESERVED_CHARS {
        bail!(
            "Invalid config: char_budget must be greater than {}.\n\n\
             💡 Hint: The default is {}.",
            SampleBudget::DEFAULT_RESERVED_CHARS,
            SampleBudget::DEFAULT_TOTAL_CHARS
        );
    }
    Ok(())
}

fn validate_base_url(key: &str, url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!(
            "Invalid config: {} must be an http(s) URL, got '{}'.",
            key,
            url
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}

/// Values given on the command line; `None` defers to the file or default.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub model: Option<String>,
    pub llm_base_url: Option<String>,
    pub nvd_base_url: Option<String>,
    pub sample_seed: Option<u64>,
    pub max_samples: Option<usize>,
    pub char_budget: Option<usize>,
    pub transcript: Option<TranscriptMode>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub model: String,
    pub llm_base_url: String,
    pub nvd_base_url: String,
    pub budget: SampleBudget,
    pub sample_seed: Option<u64>,
    pub transcript: TranscriptMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            model: GroqChatClient::DEFAULT_MODEL.to_string(),
            llm_base_url: GroqChatClient::DEFAULT_BASE_URL.to_string(),
            nvd_base_url: QueryAssembler::NVD_CVE_ENDPOINT.to_string(),
            budget: SampleBudget::default(),
            sample_seed: None,
            transcript: TranscriptMode::default(),
        }
    }
}

impl AppSettings {
    /// Merges defaults, the config file and CLI overrides, in that order.
    pub fn from_sources(file: Option<&ConfigFile>, overrides: SettingsOverrides) -> Result<Self> {
        let defaults = Self::default();
        let empty = ConfigFile::default();
        let file = file.unwrap_or(&empty);

        let file_transcript = match file.transcript.as_deref() {
            Some(mode) => Some(
                mode.parse::<TranscriptMode>()
                    .map_err(|e| anyhow::anyhow!("Invalid config: transcript: {}", e))?,
            ),
            None => None,
        };

        let max_samples = overrides
            .max_samples
            .or(file.max_samples)
            .unwrap_or(defaults.budget.max_samples);
        let char_budget = overrides
            .char_budget
            .or(file.char_budget)
            .unwrap_or(defaults.budget.total_chars);
        validate_max_samples(max_samples)?;
        validate_char_budget(char_budget)?;

        let llm_base_url = overrides
            .llm_base_url
            .or_else(|| file.llm_base_url.clone())
            .unwrap_or(defaults.llm_base_url);
        let nvd_base_url = overrides
            .nvd_base_url
            .or_else(|| file.nvd_base_url.clone())
            .unwrap_or(defaults.nvd_base_url);
        validate_base_url("llm_base_url", &llm_base_url)?;
        validate_base_url("nvd_base_url", &nvd_base_url)?;

        Ok(Self {
            model: overrides
                .model
                .or_else(|| file.model.clone())
                .unwrap_or(defaults.model),
            llm_base_url,
            nvd_base_url,
            budget: SampleBudget {
                total_chars: char_budget,
                reserved_chars: defaults.budget.reserved_chars,
                max_samples,
            },
            sample_seed: overrides.sample_seed.or(file.sample_seed),
            transcript: overrides
                .transcript
                .or(file_transcript)
                .unwrap_or(defaults.transcript),
        })
    }
}

/// API keys for the two remote services.
#[derive(Clone)]
pub struct Credentials {
    pub llm_api_key: String,
    pub nvd_api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("llm_api_key", &"<redacted>")
            .field("nvd_api_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Looks each key up with `lookup`, asking through `prompt` when absent
    ///
    /// `prompt` returns `None` when no answer can be read (end of input).
    pub fn resolve<L, P>(lookup: L, mut prompt: P) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
        P: FnMut(&str) -> Result<Option<String>>,
    {
        let mut resolve_one = |var: &str, label: &str| -> Result<String> {
            if let Some(value) = lookup(var).filter(|v| !v.trim().is_empty()) {
                return Ok(value.trim().to_string());
            }
            tracing::debug!(var, "credential not in environment, prompting");
            match prompt(label)? {
                Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
                _ => Err(ChatError::MissingCredential {
                    name: var.to_string(),
                    hint: format!(
                        "Set the {} environment variable or enter the key when prompted",
                        var
                    ),
                }
                .into()),
            }
        };

        let llm_api_key = resolve_one(GROQ_API_KEY_VAR, "Enter API key for groq LLM: ")?;
        let nvd_api_key = resolve_one(NVD_API_KEY_VAR, "Enter API key for NVD: ")?;

        Ok(Self {
            llm_api_key,
            nvd_api_key,
        })
    }
}
