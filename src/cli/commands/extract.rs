use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Local};

use super::super::args::ExtractCommand;
use super::{CommandResult, ExtractSummary};
use crate::config::{
    Config, ConfigLoadResult, FunctionNames, GroupConfig, load_config, resolve_path,
};
use crate::core::extract::ExtractOptions;
use crate::core::files::discover_files;
use crate::core::pipeline::{Extraction, ExtractorGroup};

/// Header timestamp format, e.g. `Sun Oct 18 2026 14:03:00 GMT+0200`.
const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Timestamp for the template header. `SOURCE_DATE_EPOCH` pins it (in UTC) for
/// reproducible output.
pub fn generation_timestamp() -> String {
    let pinned = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|value| value.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0));

    match pinned {
        Some(timestamp) => timestamp.format(TIMESTAMP_FORMAT).to_string(),
        None => Local::now().format(TIMESTAMP_FORMAT).to_string(),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(mut config: Config, cmd: &ExtractCommand) -> Config {
    if !cmd.function_names.is_empty() {
        config.function_name = FunctionNames::Many(cmd.function_names.clone());
    }
    if let Some(pot_file) = &cmd.pot_file {
        config.pot_file = pot_file.to_string_lossy().into_owned();
    }
    if !cmd.sources.is_empty() {
        config.groups = vec![GroupConfig {
            extractor: cmd.extractor,
            src: cmd.sources.clone(),
        }];
    }
    config
}

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let root = &cmd.common.source_root;
    let ConfigLoadResult { config, from_file } = load_config(root)?;
    let config = apply_overrides(config, &cmd);
    config.validate()?;

    let mut skipped_count = 0;
    let groups: Vec<ExtractorGroup> = config
        .groups
        .iter()
        .map(|group| {
            let discovered = discover_files(root, &group.src, group.extractor);
            skipped_count += discovered.skipped_count;
            tracing::debug!(
                extractor = group.extractor.name(),
                files = discovered.files.len(),
                "Discovered source files"
            );
            ExtractorGroup {
                language: group.extractor,
                files: discovered.files,
            }
        })
        .collect();

    let pot_file: PathBuf = resolve_path(root, &config.pot_file);
    let extraction = Extraction::new(ExtractOptions::new(config.function_name.to_vec()));
    let result = extraction.run_and_write(&groups, &pot_file, &generation_timestamp())?;

    Ok(CommandResult::Extract(ExtractSummary {
        groups: result.groups,
        message_count: result.catalog.len(),
        pot_file,
        skipped_count,
        config_from_file: from_file,
    }))
}
