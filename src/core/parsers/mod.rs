//! Source parsing.
//!
//! - `source`: swc front end and per-language syntax selection
//! - `lower`: conversion of the swc AST into [`crate::core::syntax::SyntaxNode`]

pub mod lower;
pub mod source;
