//! Source file discovery for extractor groups.
//!
//! Each `src` entry is either a glob pattern (contains `*` or `?`) or a literal
//! path. Globs and literal files are taken as-is; directories are walked and
//! filtered by the group's language extensions. Results keep pattern order,
//! are sorted within each pattern, and never contain the same file twice.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use glob::glob;
use walkdir::WalkDir;

use crate::core::parsers::source::Language;

const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of discovering the files of one group.
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    pub files: Vec<PathBuf>,
    /// Literal paths that did not exist and walk entries that could not be read.
    pub skipped_count: usize,
}

pub fn discover_files(base_dir: &Path, patterns: &[String], language: Language) -> DiscoveredFiles {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut result = DiscoveredFiles::default();

    for pattern in patterns {
        let mut matched = if is_glob_pattern(pattern) {
            expand_glob(base_dir, pattern, language, &mut result.skipped_count)
        } else {
            expand_literal(base_dir, pattern, language, &mut result.skipped_count)
        };
        matched.sort();

        for path in matched {
            if seen.insert(path.clone()) {
                result.files.push(path);
            }
        }
    }

    result
}

fn expand_glob(
    base_dir: &Path,
    pattern: &str,
    language: Language,
    skipped_count: &mut usize,
) -> Vec<PathBuf> {
    let full_pattern = base_dir.join(pattern);
    let entries = match glob(&full_pattern.to_string_lossy()) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(pattern, error = %e, "Invalid glob pattern");
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) if path.is_dir() => {
                files.extend(walk_dir(&path, language, skipped_count));
            }
            Ok(_) => {}
            Err(e) => {
                *skipped_count += 1;
                tracing::warn!(error = %e, "Cannot access path");
            }
        }
    }
    files
}

fn expand_literal(
    base_dir: &Path,
    pattern: &str,
    language: Language,
    skipped_count: &mut usize,
) -> Vec<PathBuf> {
    let path = base_dir.join(pattern);
    if path.is_file() {
        vec![path]
    } else if path.is_dir() {
        walk_dir(&path, language, skipped_count)
    } else {
        *skipped_count += 1;
        tracing::warn!(path = %path.display(), "Source path does not exist");
        Vec::new()
    }
}

fn walk_dir(dir: &Path, language: Language, skipped_count: &mut usize) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !(entry.file_type().is_dir()
                    && SKIPPED_DIRS.iter().any(|name| entry.file_name() == *name))
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                *skipped_count += 1;
                tracing::warn!(error = %e, "Cannot access path");
                continue;
            }
        };
        let path = entry.path();
        if entry.file_type().is_file() && language.matches_path(path) {
            files.push(path.to_path_buf());
        }
    }
    files
}
