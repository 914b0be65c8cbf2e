use std::path::PathBuf;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    /// Paths that could not be scanned or read.
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running langgen commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        let error_count = match &summary {
            CommandSummary::Init(init) if init.error.is_some() => 1,
            _ => 0,
        };
        Self {
            summary,
            error_count,
        }
    }
}
