use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrchestrationMode {
    Auto,
    Manager,
    Sequential,
}

impl OrchestrationMode {
    pub fn label(self) -> &'static str {
        match self {
            OrchestrationMode::Auto => "auto",
            OrchestrationMode::Manager => "manager",
            OrchestrationMode::Sequential => "sequential",
        }
    }
}

const CLI_EXAMPLES: &str = "Examples:\n\
  newsroom\n\
  newsroom run Tech News\n\
  newsroom --orchestration sequential run Climate\n\
  newsroom --profile weekly --config-path .newsroom/config.toml run\n\
  newsroom --telemetry-enabled true --telemetry-path /tmp/newsroom.jsonl run AI Stock Trends\n\
  newsroom topics\n\
  newsroom doctor\n\
\n\
Orchestration:\n\
  - auto uses the group chat manager when built with --features group-chat.\n\
  - manager always tries the group chat manager first.\n\
  - Any manager failure falls back to the sequential Reporter -> Editor pipeline.";

#[derive(Debug, Parser)]
#[command(name = "newsroom")]
#[command(about = "Reporter -> Editor newsletter pipeline")]
#[command(after_long_help = CLI_EXAMPLES)]
pub struct Cli {
    #[arg(long, env = "NEWSROOM_PROFILE", default_value = "default")]
    pub profile: String,

    #[arg(long, env = "NEWSROOM_CONFIG", default_value = ".newsroom/config.toml")]
    pub config_path: String,

    #[arg(long, env = "NEWSROOM_ORCHESTRATION", value_enum)]
    pub orchestration: Option<OrchestrationMode>,

    #[arg(long, env = "NEWSROOM_MAX_ROUND")]
    pub max_round: Option<usize>,

    #[arg(long, env = "NEWSROOM_TELEMETRY_ENABLED", action = clap::ArgAction::Set)]
    pub telemetry_enabled: Option<bool>,

    #[arg(long, env = "NEWSROOM_TELEMETRY_PATH")]
    pub telemetry_path: Option<String>,

    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Run the Reporter -> Editor pipeline for a topic (profile default if omitted)")]
    Run { topic: Vec<String> },
    #[command(about = "List topics known to the fact table")]
    Topics,
    #[command(about = "Show resolved configuration and orchestration availability")]
    Doctor,
}
