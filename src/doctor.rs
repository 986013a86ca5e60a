use crate::config::RuntimeConfig;
use crate::runner::{manager_available, should_use_manager};
use crate::tools::known_topics;

pub fn run_doctor(cfg: &RuntimeConfig) {
    println!("{}", render_doctor(cfg, manager_available()));
}

pub fn render_doctor(cfg: &RuntimeConfig, manager_available: bool) -> String {
    let manager_status = if manager_available {
        "compiled in"
    } else {
        "not compiled in (enable the group-chat feature)"
    };

    [
        format!(
            "Active profile: '{}' (config: {})",
            cfg.profile, cfg.config_path
        ),
        format!("Default topic: {}", cfg.default_topic),
        format!("Group chat manager: {manager_status}"),
        format!(
            "Orchestration: mode={}, uses_manager={}, max_round={}",
            cfg.orchestration.label(),
            should_use_manager(cfg.orchestration, manager_available),
            cfg.max_round
        ),
        format!(
            "Agents: reporter='{}' editor='{}'",
            cfg.reporter_name, cfg.editor_name
        ),
        format!(
            "Telemetry: enabled={}, path={}",
            cfg.telemetry_enabled, cfg.telemetry_path
        ),
        format!("Known topics: {}", known_topics().join(", ")),
    ]
    .join("\n")
}

pub fn run_topics(cfg: &RuntimeConfig) {
    println!("{}", render_topics(cfg));
}

pub fn render_topics(cfg: &RuntimeConfig) -> String {
    let mut lines = vec![format!("Known topics (default='{}'):", cfg.default_topic)];
    for topic in known_topics() {
        let marker = if topic == cfg.default_topic { "*" } else { " " };
        lines.push(format!("{marker} {topic}"));
    }
    lines.join("\n")
}
