use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::agents::editor::DEFAULT_EDITOR_NAME;
use crate::agents::reporter::DEFAULT_REPORTER_NAME;
use crate::cli::{Cli, OrchestrationMode};
use crate::manager::DEFAULT_MAX_ROUND;

pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_TOPIC: &str = "AI Stock Trends";
pub const DEFAULT_TELEMETRY_PATH: &str = ".newsroom/telemetry/events.jsonl";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub profile: String,
    pub config_path: String,
    pub default_topic: String,
    pub orchestration: OrchestrationMode,
    pub max_round: usize,
    pub reporter_name: String,
    pub editor_name: String,
    pub telemetry_enabled: bool,
    pub telemetry_path: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            config_path: ".newsroom/config.toml".to_string(),
            default_topic: DEFAULT_TOPIC.to_string(),
            orchestration: OrchestrationMode::Auto,
            max_round: DEFAULT_MAX_ROUND,
            reporter_name: DEFAULT_REPORTER_NAME.to_string(),
            editor_name: DEFAULT_EDITOR_NAME.to_string(),
            telemetry_enabled: false,
            telemetry_path: DEFAULT_TELEMETRY_PATH.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    pub default_topic: Option<String>,
    pub orchestration: Option<OrchestrationMode>,
    pub max_round: Option<usize>,
    pub reporter_name: Option<String>,
    pub editor_name: Option<String>,
    pub telemetry_enabled: Option<bool>,
    pub telemetry_path: Option<String>,
}

pub fn load_profiles(config_path: &str) -> Result<ProfilesFile> {
    let path = Path::new(config_path);
    if !path.exists() {
        return Ok(ProfilesFile::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at '{}'", path.display()))?;
    parse_profiles(&content).with_context(|| {
        format!(
            "invalid configuration in '{}'. Check orchestration values and field names.",
            path.display()
        )
    })
}

pub fn parse_profiles(content: &str) -> Result<ProfilesFile> {
    Ok(toml::from_str::<ProfilesFile>(content)?)
}

pub fn resolve_runtime_config(cli: &Cli, profiles: &ProfilesFile) -> Result<RuntimeConfig> {
    let profile = match profiles.profiles.get(&cli.profile) {
        Some(profile) => profile.clone(),
        None if cli.profile == DEFAULT_PROFILE => ProfileConfig::default(),
        None => {
            return Err(anyhow::anyhow!(
                "config profile '{}' not found in '{}'",
                cli.profile,
                cli.config_path
            ));
        }
    };
    let defaults = RuntimeConfig::default();

    let default_topic = profile
        .default_topic
        .unwrap_or(defaults.default_topic);
    if default_topic.trim().is_empty() {
        return Err(anyhow::anyhow!(
            "config profile '{}' sets an empty default_topic",
            cli.profile
        ));
    }

    Ok(RuntimeConfig {
        profile: cli.profile.clone(),
        config_path: cli.config_path.clone(),
        default_topic,
        orchestration: cli
            .orchestration
            .or(profile.orchestration)
            .unwrap_or(defaults.orchestration),
        max_round: cli
            .max_round
            .or(profile.max_round)
            .unwrap_or(defaults.max_round),
        reporter_name: profile.reporter_name.unwrap_or(defaults.reporter_name),
        editor_name: profile.editor_name.unwrap_or(defaults.editor_name),
        telemetry_enabled: cli
            .telemetry_enabled
            .or(profile.telemetry_enabled)
            .unwrap_or(defaults.telemetry_enabled),
        telemetry_path: cli
            .telemetry_path
            .clone()
            .or(profile.telemetry_path)
            .unwrap_or(defaults.telemetry_path),
    })
}
