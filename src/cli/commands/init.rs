use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{CommandResult, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json, resolve_path};

/// Write the default configuration to `dir`, refusing to overwrite an existing file.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = resolve_path(dir, CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)?;
    Ok(CommandResult::Init(InitSummary { path: config_path }))
}
