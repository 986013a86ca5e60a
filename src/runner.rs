use std::sync::Arc;

use anyhow::Result;
use serde_json::json;

use crate::agents::{Agent, EditorAgent, ReporterAgent};
use crate::cli::OrchestrationMode;
use crate::config::RuntimeConfig;
use crate::error::categorize_error;
use crate::manager::{ChatTask, GroupChat, GroupChatManager};
use crate::telemetry::TelemetrySink;
use crate::tools::{DataTool, FunctionTool};
use crate::workflow::run_sequential_pipeline;

pub const MANAGER_BANNER: &str = "Starting group chat run...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestrationPath {
    Manager,
    Sequential,
}

impl OrchestrationPath {
    pub fn label(self) -> &'static str {
        match self {
            OrchestrationPath::Manager => "manager",
            OrchestrationPath::Sequential => "sequential",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub topic: String,
    pub path: OrchestrationPath,
    pub notices: Vec<String>,
    pub output: String,
}

impl RunOutcome {
    pub fn render(&self) -> String {
        let mut out = format!("Topic: {}\n\n", self.topic);
        for notice in &self.notices {
            out.push_str(notice);
            out.push('\n');
        }
        out.push_str(&self.output);
        out
    }
}

pub fn manager_available() -> bool {
    cfg!(feature = "group-chat")
}

pub fn should_use_manager(mode: OrchestrationMode, available: bool) -> bool {
    match mode {
        OrchestrationMode::Auto => available,
        OrchestrationMode::Manager => true,
        OrchestrationMode::Sequential => false,
    }
}

/// Topic as typed on the command line, words joined by single spaces.
pub fn resolve_topic(words: &[String], default_topic: &str) -> Result<String> {
    if words.is_empty() {
        return Ok(default_topic.to_string());
    }
    let topic = words.join(" ");
    if topic.trim().is_empty() {
        return Err(anyhow::anyhow!("topic must not be blank"));
    }
    Ok(topic)
}

pub fn build_reporter(cfg: &RuntimeConfig) -> ReporterAgent {
    build_reporter_with_tool(cfg, Arc::new(FunctionTool::fact_table()))
}

fn build_reporter_with_tool(cfg: &RuntimeConfig, tool: Arc<dyn DataTool>) -> ReporterAgent {
    ReporterAgent::new(cfg.reporter_name.clone()).with_tool(tool)
}

pub fn build_editor(cfg: &RuntimeConfig) -> EditorAgent {
    EditorAgent::new(cfg.editor_name.clone())
}

pub fn run_with_manager(cfg: &RuntimeConfig, topic: &str, available: bool) -> Result<String> {
    if !available {
        return Err(anyhow::anyhow!(
            "group chat manager is not compiled in (build with --features group-chat)"
        ));
    }

    let tool: Arc<dyn DataTool> = Arc::new(FunctionTool::fact_table());
    tracing::info!(
        tool = tool.name(),
        description = tool.description(),
        agent = %cfg.reporter_name,
        "Registered data tool for group chat"
    );
    let task = ChatTask::newsletter(topic, tool.name());

    let agents: Vec<Arc<dyn Agent>> = vec![
        Arc::new(build_reporter_with_tool(cfg, tool)),
        Arc::new(build_editor(cfg)),
    ];
    let mut manager = GroupChatManager::new(GroupChat::new(agents, cfg.max_round));
    manager.run(&task)
}

pub fn run_topic(cfg: &RuntimeConfig, topic: &str) -> RunOutcome {
    run_topic_with_availability(cfg, topic, manager_available())
}

/// Path A (group chat) when selected, path B (sequential) otherwise or after any path A error.
pub fn run_topic_with_availability(
    cfg: &RuntimeConfig,
    topic: &str,
    manager_available: bool,
) -> RunOutcome {
    let telemetry = TelemetrySink::new(cfg, topic);
    telemetry.emit(
        "pipeline.started",
        json!({ "orchestration": cfg.orchestration.label() }),
    );

    let mut notices = Vec::new();
    if should_use_manager(cfg.orchestration, manager_available) {
        notices.push(MANAGER_BANNER.to_string());
        match run_with_manager(cfg, topic, manager_available) {
            Ok(output) => {
                telemetry.emit("pipeline.completed", json!({ "path": "manager" }));
                return RunOutcome {
                    topic: topic.to_string(),
                    path: OrchestrationPath::Manager,
                    notices,
                    output,
                };
            }
            Err(err) => {
                tracing::warn!(error = %err, topic, "Group chat orchestration failed; falling back");
                telemetry.emit(
                    "manager.failed",
                    json!({
                        "error": format!("{err:#}"),
                        "category": categorize_error(&err).code(),
                    }),
                );
                notices.push(format!(
                    "Group chat orchestration failed or API mismatch: {err:#}"
                ));
                notices.push("Falling back to sequential pipeline...\n".to_string());
            }
        }
    }

    let log = run_sequential_pipeline(topic, &build_reporter(cfg), &build_editor(cfg));
    telemetry.emit("pipeline.completed", json!({ "path": "sequential" }));
    RunOutcome {
        topic: topic.to_string(),
        path: OrchestrationPath::Sequential,
        notices,
        output: log.render(),
    }
}
