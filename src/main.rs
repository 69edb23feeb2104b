mod cli;

use cli::Args;
use nvd_chat::adapters::inbound::ConsoleChat;
use nvd_chat::adapters::outbound::console::StderrProgressReporter;
use nvd_chat::adapters::outbound::network::{GroqChatClient, NvdClient};
use nvd_chat::application::factories::{PresenterFactory, PresenterType};
use nvd_chat::application::tools::NvdSearchTool;
use nvd_chat::application::use_cases::AnswerQuestionUseCase;
use nvd_chat::config::{self, AppSettings, Credentials};
use nvd_chat::nvd_query::services::QueryAssembler;
use nvd_chat::shared::error::ExitCode;
use nvd_chat::shared::observability::{init_logging, LogConfig};
use nvd_chat::shared::Result;
use std::io;
use std::path::Path;
use std::process;

const NVD_NOTICE: &str = "This product uses the NVD API but is not endorsed or certified by the NVD.";

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (exits with code 2 on invalid input)
    let args = Args::parse_args();

    init_logging(LogConfig {
        verbose: args.verbose,
        ..LogConfig::default()
    });

    let settings = load_settings(&args, &std::env::current_dir()?)?;
    tracing::debug!(?settings, "resolved settings");

    eprintln!("{}\n", NVD_NOTICE);

    let stdin = io::stdin();
    let mut chat = ConsoleChat::new(stdin.lock(), io::stdout(), settings.transcript);

    let credentials = Credentials::resolve(|var| std::env::var(var).ok(), |label| chat.prompt(label))?;
    tracing::debug!(?credentials, "credentials resolved");

    // Create adapters (Dependency Injection)
    let intent_parser = GroqChatClient::new(
        credentials.llm_api_key.clone(),
        settings.model.clone(),
        settings.llm_base_url.clone(),
    )?;
    let repository = NvdClient::new(credentials.nvd_api_key.clone())?;

    let mut search_tool = NvdSearchTool::new(
        repository,
        QueryAssembler::with_base_url(settings.nvd_base_url.clone()),
        settings.budget,
    );
    if let Some(seed) = settings.sample_seed {
        search_tool = search_tool.with_seed(seed);
    }

    // Create use case with injected dependencies
    let mut use_case =
        AnswerQuestionUseCase::new(intent_parser, search_tool, StderrProgressReporter::new());

    let presenter = PresenterFactory::create(PresenterType::from_optional_path(args.transcript_out));
    let reporter = StderrProgressReporter::new();

    chat.run(&mut use_case, presenter.as_ref(), &reporter)
}

/// Resolves settings from an explicit or discovered config file plus CLI flags
fn load_settings(args: &Args, working_dir: &Path) -> Result<AppSettings> {
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(working_dir)?,
    };
    AppSettings::from_sources(config_file.as_ref(), args.to_overrides())
}
