//! Message extraction from a single source file.
//!
//! Pipeline for one file: parse and lower (`crate::core::parsers`), scan the tree
//! for translation calls (`scanner`), turn each call into a message (`invocation`,
//! `options`, `comments`, `flatten`) and collect them in a per-file [`Catalog`].

pub mod comments;
pub mod flatten;
pub mod invocation;
pub mod options;
pub mod scanner;


use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::catalog::Catalog;
use crate::core::parsers::source::{Language, ParsedSource, parse_source};

pub use flatten::{flatten_identifier, flatten_string};
pub use invocation::parse_invocation;
pub use options::OptionsBag;
pub use scanner::MessageScanner;

/// Default translation function name.
pub const DEFAULT_FUNCTION_NAME: &str = "tr";

/// Settings shared by every file of an extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Names (possibly dotted, e.g. `i18n.tr`) recognised as translation calls.
    pub function_names: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::new([DEFAULT_FUNCTION_NAME])
    }
}

impl ExtractOptions {
    pub fn new<I, S>(function_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function_names: function_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Empty names never match, so an unflattenable callee is never a translation call.
    pub fn is_translation_function(&self, name: &str) -> bool {
        !name.is_empty() && self.function_names.iter().any(|f| f == name)
    }
}

/// Extract messages from an already parsed file.
pub fn extract_messages(source: &ParsedSource, options: &ExtractOptions) -> Catalog {
    MessageScanner::new(options, source).analyze()
}

/// Parse `code` and extract its messages. Parse errors are returned as errors.
pub fn extract_source(
    code: &str,
    file_path: &str,
    language: Language,
    options: &ExtractOptions,
) -> Result<Catalog> {
    let source = parse_source(code, file_path, language)?;
    Ok(extract_messages(&source, options))
}

/// Read, parse and extract a file from disk.
pub fn extract_file(path: &Path, language: Language, options: &ExtractOptions) -> Result<Catalog> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    let catalog = extract_source(&code, &path.to_string_lossy(), language, options)?;
    tracing::debug!(
        file = %path.display(),
        count = catalog.len(),
        "Extracted messages from file"
    );
    Ok(catalog)
}
