use chrono::Local;

use crate::agents::{Agent, EditorAgent, ReporterAgent};

pub const RUN_LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Record of one manual Reporter -> Editor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLog {
    pub topic: String,
    pub started_at: String,
    pub reporter_output: String,
    pub editor_output: String,
    pub finished_at: String,
}

impl RunLog {
    pub fn lines(&self) -> Vec<String> {
        vec![
            "=== RUN LOG START ===".to_string(),
            format!("Run start: {}", self.started_at),
            format!("Reporter Output: {}", self.reporter_output),
            format!("Editor Output: {}", self.editor_output),
            format!("Run end: {}", self.finished_at),
            "=== RUN LOG END ===".to_string(),
        ]
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

pub fn local_timestamp() -> String {
    Local::now().format(RUN_LOG_TIMESTAMP_FORMAT).to_string()
}

pub fn run_sequential_pipeline(
    topic: &str,
    reporter: &ReporterAgent,
    editor: &EditorAgent,
) -> RunLog {
    run_sequential_pipeline_with_clock(topic, reporter, editor, local_timestamp)
}

pub fn run_sequential_pipeline_with_clock(
    topic: &str,
    reporter: &ReporterAgent,
    editor: &EditorAgent,
    mut now: impl FnMut() -> String,
) -> RunLog {
    let started_at = now();

    let reporter_output = reporter.handle_input(topic);
    tracing::info!(agent = reporter.name(), topic, "Reporter stage completed");

    let editor_output = editor.handle_input(&reporter_output);
    tracing::info!(agent = editor.name(), topic, "Editor stage completed");

    RunLog {
        topic: topic.to_string(),
        started_at,
        reporter_output,
        editor_output,
        finished_at: now(),
    }
}
