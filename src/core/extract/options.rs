use std::collections::HashMap;

use crate::core::extract::flatten::flatten_string;
use crate::core::syntax::{NodeKind, SyntaxNode};

/// Options passed to a translation call as an object literal, e.g.
/// `tr("Open", { context: "menu", comment: "File menu entry" })`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsBag {
    entries: HashMap<String, String>,
}

impl OptionsBag {
    /// Read an object literal. Anything else yields an empty bag.
    ///
    /// Keys may be identifiers or literals; computed keys are ignored. Only entries
    /// whose key and flattened value are both non-empty are kept.
    pub fn parse(node: &SyntaxNode) -> Self {
        let mut entries = HashMap::new();
        if let NodeKind::Object { properties } = &node.kind {
            for property in properties {
                let NodeKind::Property { key, value } = &property.kind else {
                    continue;
                };
                let key = property_key(key);
                let value = flatten_string(value);
                if !key.is_empty() && !value.is_empty() {
                    entries.insert(key, value);
                }
            }
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn context(&self) -> &str {
        self.get("context").unwrap_or_default()
    }

    pub fn comment(&self) -> &str {
        self.get("comment").unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn property_key(key: &SyntaxNode) -> String {
    match &key.kind {
        NodeKind::Literal(literal) => literal.to_string(),
        NodeKind::Identifier { name } => name.clone(),
        _ => String::new(),
    }
}
