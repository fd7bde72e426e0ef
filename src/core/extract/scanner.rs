//! Recursive scan of a syntax tree for translation calls.
//!
//! Every enumerated node kind names exactly which child slots are visited.
//! A call whose callee flattens to a configured function name is handed to
//! [`parse_invocation`] and its subtree is not scanned any further, so
//! `tr(tr("inner"))` only ever yields (at most) the outer message. A callee that
//! cannot be flattened matches nothing and is scanned like any other call.

use crate::core::catalog::Catalog;
use crate::core::extract::ExtractOptions;
use crate::core::extract::flatten::flatten_identifier;
use crate::core::extract::invocation::parse_invocation;
use crate::core::parsers::source::ParsedSource;
use crate::core::syntax::{Body, NodeKind, SyntaxNode};

pub struct MessageScanner<'a> {
    options: &'a ExtractOptions,
    source: &'a ParsedSource,
    catalog: Catalog,
}

impl<'a> MessageScanner<'a> {
    pub fn new(options: &'a ExtractOptions, source: &'a ParsedSource) -> Self {
        Self {
            options,
            source,
            catalog: Catalog::new(),
        }
    }

    /// Scan the whole program and return the messages found, in source order.
    pub fn analyze(mut self) -> Catalog {
        let source = self.source;
        self.scan(&source.program);
        self.catalog
    }

    fn scan_all(&mut self, nodes: &[SyntaxNode]) {
        for node in nodes {
            self.scan(node);
        }
    }

    fn scan_opt(&mut self, node: Option<&SyntaxNode>) {
        if let Some(node) = node {
            self.scan(node);
        }
    }

    pub fn scan(&mut self, node: &SyntaxNode) {
        tracing::trace!(kind = node.kind.name(), "Scanning node");

        match &node.kind {
            NodeKind::Array { elements } => self.scan_all(elements),
            NodeKind::Assignment { right, .. } => self.scan(right),
            NodeKind::Binary { left, right, .. } | NodeKind::Logical { left, right, .. } => {
                self.scan(left);
                self.scan(right);
            }
            NodeKind::Call { callee, arguments } => {
                let name = flatten_identifier(callee);
                if self.options.is_translation_function(&name) {
                    if let Some(message) = parse_invocation(arguments, node.loc, self.source) {
                        self.catalog.insert_or_overwrite(message);
                    }
                } else {
                    self.scan(callee);
                    self.scan_all(arguments);
                }
            }
            NodeKind::Conditional {
                consequent,
                alternate,
                ..
            } => {
                self.scan(alternate);
                self.scan(consequent);
            }
            NodeKind::ExpressionStatement { expression } => self.scan(expression),
            NodeKind::If {
                consequent,
                alternate,
                ..
            } => {
                self.scan(consequent);
                self.scan_opt(alternate.as_deref());
            }
            NodeKind::Member {
                object, property, ..
            } => {
                self.scan(object);
                self.scan(property);
            }
            NodeKind::New { arguments, .. } => self.scan_all(arguments),
            NodeKind::Object { properties } => self.scan_all(properties),
            NodeKind::Property { value, .. } => self.scan(value),
            NodeKind::Try {
                block,
                handler,
                finalizer,
            } => {
                self.scan(block);
                self.scan_opt(handler.as_deref());
                self.scan_opt(finalizer.as_deref());
            }
            NodeKind::Sequence { expressions } => self.scan_all(expressions),
            NodeKind::Switch { cases, .. } => self.scan_all(cases),
            NodeKind::SwitchCase { test, consequent } => {
                self.scan_opt(test.as_deref());
                self.scan_all(consequent);
            }
            NodeKind::VariableDeclaration { declarations } => self.scan_all(declarations),
            NodeKind::VariableDeclarator { init } => self.scan_opt(init.as_deref()),
            NodeKind::Identifier { .. } | NodeKind::Literal(_) => {}
            NodeKind::Other { argument, body, .. } => {
                self.scan_opt(argument.as_deref());
                match body {
                    Some(Body::Sequence(children)) => self.scan_all(children),
                    Some(Body::Single(child)) => self.scan(child),
                    None => {}
                }
            }
        }
    }
}
