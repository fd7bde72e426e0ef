//! jsgettext - translation string extractor for JavaScript and TypeScript
//!
//! Scans source files for calls to a translation function (`tr` by default),
//! collects singular/plural strings, contexts and translator comments, and
//! writes them to a gettext `.pot` template.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parse, scan, merge, render)

pub mod cli;
pub mod config;
pub mod core;
