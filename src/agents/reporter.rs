/// Reporter agent - fetches topic data through a registered tool.
use std::sync::Arc;

use super::Agent;
use crate::tools::DataTool;

pub const DEFAULT_REPORTER_NAME: &str = "Reporter";

pub struct ReporterAgent {
    name: String,
    tool: Option<Arc<dyn DataTool>>,
}

impl ReporterAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tool: None,
        }
    }

    pub fn with_tool(mut self, tool: Arc<dyn DataTool>) -> Self {
        self.tool = Some(tool);
        self
    }
}

impl Default for ReporterAgent {
    fn default() -> Self {
        Self::new(DEFAULT_REPORTER_NAME)
    }
}

impl Agent for ReporterAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle_input(&self, topic: &str) -> String {
        let data = match self.tool.as_deref() {
            Some(tool) => {
                tracing::debug!(agent = %self.name, tool = tool.name(), topic, "Fetching topic data");
                tool.fetch(topic)
            }
            None => format!("(no tool) simulated data for {topic}"),
        };
        format!("{} fetched: {data}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::FunctionTool;

    #[test]
    fn reporter_wraps_tool_output() {
        let reporter = ReporterAgent::default().with_tool(Arc::new(FunctionTool::fact_table()));
        assert_eq!(
            reporter.handle_input("Tech News"),
            "Reporter fetched: New AI chips announced with 40% speed improvement."
        );
    }

    #[test]
    fn reporter_without_tool_emits_placeholder() {
        let reporter = ReporterAgent::new("Desk");
        assert_eq!(
            reporter.handle_input("Climate"),
            "Desk fetched: (no tool) simulated data for Climate"
        );
    }
}
