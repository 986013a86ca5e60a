/// Data tools available to the Reporter.
use std::sync::Arc;

const FACT_TABLE: [(&str, &str); 3] = [
    (
        "AI Stock Trends",
        "AI stocks increased 12% today, led by OpenAI and Anthropic.",
    ),
    (
        "Tech News",
        "New AI chips announced with 40% speed improvement.",
    ),
    (
        "Climate",
        "Unusual warm spell recorded across Mediterranean this week.",
    ),
];

/// Look up the canned fact for a topic. Total: unknown topics get a "no data" line.
pub fn fetch_live_data(topic: &str) -> String {
    FACT_TABLE
        .iter()
        .find(|(key, _)| *key == topic)
        .map(|(_, fact)| fact.to_string())
        .unwrap_or_else(|| format!("No data available for '{topic}'"))
}

pub fn known_topics() -> Vec<&'static str> {
    FACT_TABLE.iter().map(|(key, _)| *key).collect()
}

pub trait DataTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn fetch(&self, topic: &str) -> String;
}

type FetchFn = dyn Fn(&str) -> String + Send + Sync;

/// Adapts any callable data source into a [`DataTool`].
#[derive(Clone)]
pub struct FunctionTool {
    name: String,
    description: String,
    handler: Arc<FetchFn>,
}

impl FunctionTool {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            handler: Arc::new(handler),
        }
    }

    pub fn fact_table() -> Self {
        Self::new(
            "fetch_live_data",
            "Returns simulated live data for a newsletter topic.",
            fetch_live_data,
        )
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl DataTool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn fetch(&self, topic: &str) -> String {
        (self.handler)(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_topics_return_exact_facts() {
        assert_eq!(
            fetch_live_data("AI Stock Trends"),
            "AI stocks increased 12% today, led by OpenAI and Anthropic."
        );
        assert_eq!(
            fetch_live_data("Tech News"),
            "New AI chips announced with 40% speed improvement."
        );
        assert_eq!(
            fetch_live_data("Climate"),
            "Unusual warm spell recorded across Mediterranean this week."
        );
    }

    #[test]
    fn unknown_topic_reports_missing_data() {
        assert_eq!(
            fetch_live_data("Sports"),
            "No data available for 'Sports'"
        );
        assert_eq!(fetch_live_data(""), "No data available for ''");
        assert_eq!(
            fetch_live_data("tech news"),
            "No data available for 'tech news'"
        );
    }

    #[test]
    fn function_tool_delegates_to_handler() {
        let tool = FunctionTool::new("echo", "echoes", |topic| format!("<{topic}>"));
        assert_eq!(tool.name(), "echo");
        assert_eq!(tool.fetch("x"), "<x>");

        let facts = FunctionTool::fact_table();
        assert_eq!(facts.name(), "fetch_live_data");
        assert_eq!(facts.fetch("Climate"), fetch_live_data("Climate"));
    }
}
