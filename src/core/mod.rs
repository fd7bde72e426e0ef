//! Core extraction engine.
//!
//! - `parsers`: swc parsing and lowering into the [`syntax`] tree
//! - `extract`: per-file scan for translation calls
//! - `catalog`: deduplicating, order-preserving message collection
//! - `files`: source discovery for extractor groups
//! - `pipeline`: parallel multi-file runs
//! - `template`: `.pot` rendering

pub mod catalog;
pub mod extract;
pub mod files;
pub mod parsers;
pub mod pipeline;
pub mod syntax;
pub mod template;

pub use catalog::{Catalog, Message, MessageKey};
pub use extract::{ExtractOptions, extract_file, extract_messages, extract_source};
pub use parsers::source::{Language, ParsedSource, parse_source};
pub use pipeline::{Extraction, ExtractionResult, ExtractorGroup, GroupSummary, ProcessMessage};
pub use template::write_template;
