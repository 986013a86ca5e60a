/// Editor agent - turns a report line into a newsletter intro.
use super::Agent;

pub const DEFAULT_EDITOR_NAME: &str = "Editor";
pub const CLOSING_LINE: &str = "'Recent signals indicate positive momentum.'";

pub struct EditorAgent {
    name: String,
}

impl EditorAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for EditorAgent {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR_NAME)
    }
}

/// Content after the first colon, trimmed. Input without a colon is returned whole.
pub fn extract_report_content(reporter_output: &str) -> &str {
    match reporter_output.split_once(':') {
        Some((_, content)) => content.trim(),
        None => reporter_output,
    }
}

impl Agent for EditorAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle_input(&self, reporter_output: &str) -> String {
        let content = extract_report_content(reporter_output);
        format!(
            "{} summary: Based on the report → \"{content}\" — final intro: {CLOSING_LINE}",
            self.name
        )
    }
}
