//! Multi-file extraction run.
//!
//! Files of each group are parsed and scanned in parallel, then their catalogs
//! are merged in discovery order so the result does not depend on scheduling.
//! Any parse failure aborts the run before anything is written.

use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use crate::core::catalog::Catalog;
use crate::core::extract::{ExtractOptions, extract_file};
use crate::core::parsers::source::Language;
use crate::core::template::write_template;

/// Hook applied to the merged catalog before it is written.
pub type ProcessMessage = Box<dyn Fn(Catalog) -> Catalog + Send + Sync>;

/// Files handled by one extractor.
#[derive(Debug, Clone)]
pub struct ExtractorGroup {
    pub language: Language,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub language: Language,
    pub file_count: usize,
    /// Distinct messages found in this group's files.
    pub message_count: usize,
}

#[derive(Debug)]
pub struct ExtractionResult {
    pub catalog: Catalog,
    pub groups: Vec<GroupSummary>,
}

/// Extract and merge the catalogs of a group's files.
pub fn extract_group(group: &ExtractorGroup, options: &ExtractOptions) -> Result<Catalog> {
    let catalogs = group
        .files
        .par_iter()
        .map(|path| extract_file(path, group.language, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(catalogs.into_iter().fold(Catalog::new(), |mut merged, catalog| {
        merged.merge(catalog);
        merged
    }))
}

pub struct Extraction {
    options: ExtractOptions,
    process_message: ProcessMessage,
}

impl Extraction {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            process_message: Box::new(|catalog| catalog),
        }
    }

    /// Replace the post-processing hook. The default returns the catalog unchanged.
    pub fn with_process_message<F>(mut self, process_message: F) -> Self
    where
        F: Fn(Catalog) -> Catalog + Send + Sync + 'static,
    {
        self.process_message = Box::new(process_message);
        self
    }

    /// Run every group in order and return the processed catalog.
    pub fn run(&self, groups: &[ExtractorGroup]) -> Result<ExtractionResult> {
        let mut catalog = Catalog::new();
        let mut summaries = Vec::with_capacity(groups.len());

        for group in groups {
            let group_catalog = extract_group(group, &self.options)?;
            tracing::debug!(
                extractor = group.language.name(),
                files = group.files.len(),
                messages = group_catalog.len(),
                "Extracted group"
            );
            summaries.push(GroupSummary {
                language: group.language,
                file_count: group.files.len(),
                message_count: group_catalog.len(),
            });
            catalog.merge(group_catalog);
        }

        Ok(ExtractionResult {
            catalog: (self.process_message)(catalog),
            groups: summaries,
        })
    }

    /// Run all groups and write the template to `pot_file`.
    pub fn run_and_write(
        &self,
        groups: &[ExtractorGroup],
        pot_file: &Path,
        generated_at: &str,
    ) -> Result<ExtractionResult> {
        let result = self.run(groups)?;
        write_template(&result.catalog, pot_file, generated_at)?;
        tracing::debug!(
            messages = result.catalog.len(),
            path = %pot_file.display(),
            "Wrote template"
        );
        Ok(result)
    }
}

impl Default for Extraction {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}
