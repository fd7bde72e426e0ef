use std::path::PathBuf;

use crate::core::pipeline::GroupSummary;

#[derive(Debug)]
pub struct ExtractSummary {
    pub groups: Vec<GroupSummary>,
    /// Messages written after merging all groups.
    pub message_count: usize,
    pub pot_file: PathBuf,
    /// Source paths that were missing or unreadable.
    pub skipped_count: usize,
    pub config_from_file: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running jsgettext commands
#[derive(Debug)]
pub enum CommandResult {
    Extract(ExtractSummary),
    Init(InitSummary),
}
