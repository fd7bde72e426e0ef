use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::extract::DEFAULT_FUNCTION_NAME;
use crate::core::parsers::source::Language;

pub const CONFIG_FILE_NAME: &str = ".jsgettextrc.json";

/// `functionName` accepts a single name or a list of aliases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FunctionNames {
    One(String),
    Many(Vec<String>),
}

impl FunctionNames {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            FunctionNames::One(name) => vec![name.clone()],
            FunctionNames::Many(names) => names.clone(),
        }
    }
}

/// One extractor group: a language and the sources it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfig {
    #[serde(default)]
    pub extractor: Language,
    /// Glob patterns, files or directories, relative to the source root.
    #[serde(default)]
    pub src: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_function_name")]
    pub function_name: FunctionNames,
    #[serde(default = "default_pot_file")]
    pub pot_file: String,
    #[serde(default = "default_groups")]
    pub groups: Vec<GroupConfig>,
}

fn default_function_name() -> FunctionNames {
    FunctionNames::One(DEFAULT_FUNCTION_NAME.to_string())
}

fn default_pot_file() -> String {
    "messages.pot".to_string()
}

fn default_groups() -> Vec<GroupConfig> {
    vec![GroupConfig {
        extractor: Language::Javascript,
        src: vec!["src".to_string()],
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            function_name: default_function_name(),
            pot_file: default_pot_file(),
            groups: default_groups(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if no function name is configured, a function name is empty,
    /// or a glob pattern in a group's `src` is invalid.
    pub fn validate(&self) -> Result<()> {
        let names = self.function_name.to_vec();
        if names.is_empty() {
            bail!("'functionName' must name at least one function");
        }
        if names.iter().any(|name| name.trim().is_empty()) {
            bail!("'functionName' must not contain empty names");
        }

        if self.pot_file.trim().is_empty() {
            bail!("'potFile' must not be empty");
        }

        for group in &self.groups {
            for pattern in &group.src {
                if pattern.contains('*') || pattern.contains('?') {
                    Pattern::new(pattern).with_context(|| {
                        format!("Invalid glob pattern in 'groups.src': \"{}\"", pattern)
                    })?;
                }
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Join `path` onto `root`, leaving it untouched when `root` is the current directory.
pub fn resolve_path(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    if root.as_os_str().is_empty() || root == Path::new(".") {
        path.as_ref().to_path_buf()
    } else {
        root.join(path)
    }
}

/// Search `start_dir` and its ancestors for the config file, stopping at the
/// repository root (a directory containing `.git`).
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "Loaded config file");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
