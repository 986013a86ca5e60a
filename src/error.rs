#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Orchestration,
    Input,
    Internal,
}

impl ErrorCategory {
    pub fn code(self) -> &'static str {
        match self {
            ErrorCategory::Config => "CONFIG",
            ErrorCategory::Orchestration => "ORCHESTRATION",
            ErrorCategory::Input => "INPUT",
            ErrorCategory::Internal => "INTERNAL",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            ErrorCategory::Config => {
                "Check --config-path/--profile and the field names in the [profiles.<name>] table."
            }
            ErrorCategory::Orchestration => {
                "Retry with --orchestration sequential, or build with --features group-chat."
            }
            ErrorCategory::Input => "Run newsroom --help and correct command arguments.",
            ErrorCategory::Internal => {
                "Retry with RUST_LOG=debug. If it persists, capture logs and open an issue."
            }
        }
    }
}

pub fn categorize_error(err: &anyhow::Error) -> ErrorCategory {
    let msg = format!("{err:#}").to_ascii_lowercase();

    if msg.contains("config") || msg.contains("profile") || msg.contains("toml") {
        return ErrorCategory::Config;
    }

    if msg.contains("group chat")
        || msg.contains("manager")
        || msg.contains("max_round")
        || msg.contains("empty reply")
    {
        return ErrorCategory::Orchestration;
    }

    if msg.contains("invalid value") || msg.contains("unknown argument") || msg.contains("topic") {
        return ErrorCategory::Input;
    }

    ErrorCategory::Internal
}

pub fn format_cli_error(err: &anyhow::Error) -> String {
    let category = categorize_error(err);
    format!("[{}] {:#}\nHint: {}", category.code(), err, category.hint())
}
