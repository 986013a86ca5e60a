use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use newsroom_cli::cli::{Cli, Commands};
use newsroom_cli::config::{RuntimeConfig, load_profiles, resolve_runtime_config};
use newsroom_cli::doctor::{run_doctor, run_topics};
use newsroom_cli::error::{categorize_error, format_cli_error};
use newsroom_cli::runner::{resolve_topic, run_topic};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run_cli(cli) {
        eprintln!("{}", format_cli_error(&err));
        tracing::error!(category = %categorize_error(&err).code(), error = %err, "command failed");
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    init_tracing(&cli.log_filter)?;
    let profiles = load_profiles(&cli.config_path)?;
    let cfg = resolve_runtime_config(&cli, &profiles)?;
    tracing::info!(profile = %cfg.profile, orchestration = ?cfg.orchestration, "Resolved runtime config");

    match cli.command {
        None => run_pipeline(&cfg, &[])?,
        Some(Commands::Run { topic }) => run_pipeline(&cfg, &topic)?,
        Some(Commands::Topics) => run_topics(&cfg),
        Some(Commands::Doctor) => run_doctor(&cfg),
    }

    Ok(())
}

fn run_pipeline(cfg: &RuntimeConfig, words: &[String]) -> Result<()> {
    let topic = resolve_topic(words, &cfg.default_topic)?;
    let outcome = run_topic(cfg, &topic);
    tracing::info!(path = outcome.path.label(), topic = %topic, "Pipeline finished");
    println!("{}", outcome.render());
    Ok(())
}

fn init_tracing(log_filter: &str) -> Result<()> {
    let level = log_filter
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_env_filter(log_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}
