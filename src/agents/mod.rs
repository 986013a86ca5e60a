/// Newsroom agents.
///
/// The pipeline has two stages:
/// - `reporter`: turns a topic into a report line via an optional data tool
/// - `editor`: wraps the report content in the newsletter intro template
pub mod editor;
pub mod reporter;

pub use editor::EditorAgent;
pub use reporter::ReporterAgent;

/// A named agent that turns one text input into one text reply.
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;
    fn handle_input(&self, input: &str) -> String;
}
