//! Syntax tree consumed by the extraction engine.
//!
//! Source files are parsed with swc and then lowered (see `crate::core::parsers::lower`)
//! into this much smaller tree. The scanner only needs to know which child slots of a
//! node can contain translation calls, so each kind in [`NodeKind`] lists exactly those
//! slots. Kinds the scanner has no special handling for are lowered to
//! [`NodeKind::Other`], which carries generic `argument` and `body` slots so that new
//! constructs stay traversable without touching the scanner.

use std::fmt;

/// Source position of a node (both 1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loc {
    pub line: usize,
    pub column: usize,
}

impl Loc {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A node of the lowered syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Start position. Only set where the extractor needs it (call expressions).
    pub loc: Option<Loc>,
}

/// Literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    /// Regular expressions, big integers and other literals whose value never
    /// takes part in extraction. Holds the raw source text.
    Raw(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(value) => f.write_str(value),
            Literal::Number(value) => write!(f, "{}", value),
            Literal::Boolean(value) => write!(f, "{}", value),
            Literal::Null => f.write_str("null"),
            Literal::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Generic `body` slot of [`NodeKind::Other`].
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Single(Box<SyntaxNode>),
    Sequence(Vec<SyntaxNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Array {
        elements: Vec<SyntaxNode>,
    },
    /// Only the right-hand side is kept; assignment targets never hold messages.
    Assignment {
        operator: String,
        right: Box<SyntaxNode>,
    },
    Binary {
        operator: String,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
    },
    Call {
        callee: Box<SyntaxNode>,
        arguments: Vec<SyntaxNode>,
    },
    Conditional {
        test: Box<SyntaxNode>,
        consequent: Box<SyntaxNode>,
        alternate: Box<SyntaxNode>,
    },
    ExpressionStatement {
        expression: Box<SyntaxNode>,
    },
    Identifier {
        name: String,
    },
    If {
        test: Box<SyntaxNode>,
        consequent: Box<SyntaxNode>,
        alternate: Option<Box<SyntaxNode>>,
    },
    Literal(Literal),
    Logical {
        operator: String,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
    },
    Member {
        object: Box<SyntaxNode>,
        property: Box<SyntaxNode>,
        /// `obj[prop]` rather than `obj.prop`.
        computed: bool,
    },
    New {
        callee: Box<SyntaxNode>,
        arguments: Vec<SyntaxNode>,
    },
    Object {
        properties: Vec<SyntaxNode>,
    },
    Property {
        key: Box<SyntaxNode>,
        value: Box<SyntaxNode>,
    },
    Sequence {
        expressions: Vec<SyntaxNode>,
    },
    Switch {
        discriminant: Box<SyntaxNode>,
        cases: Vec<SyntaxNode>,
    },
    SwitchCase {
        test: Option<Box<SyntaxNode>>,
        consequent: Vec<SyntaxNode>,
    },
    Try {
        block: Box<SyntaxNode>,
        handler: Option<Box<SyntaxNode>>,
        finalizer: Option<Box<SyntaxNode>>,
    },
    VariableDeclaration {
        declarations: Vec<SyntaxNode>,
    },
    VariableDeclarator {
        init: Option<Box<SyntaxNode>>,
    },
    /// Any other construct (blocks, functions, classes, loops, unary operators, ...).
    Other {
        kind: &'static str,
        argument: Option<Box<SyntaxNode>>,
        body: Option<Body>,
    },
}

impl NodeKind {
    /// ESTree-style name of the node kind, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Array { .. } => "ArrayExpression",
            NodeKind::Assignment { .. } => "AssignmentExpression",
            NodeKind::Binary { .. } => "BinaryExpression",
            NodeKind::Call { .. } => "CallExpression",
            NodeKind::Conditional { .. } => "ConditionalExpression",
            NodeKind::ExpressionStatement { .. } => "ExpressionStatement",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::If { .. } => "IfStatement",
            NodeKind::Literal(_) => "Literal",
            NodeKind::Logical { .. } => "LogicalExpression",
            NodeKind::Member { .. } => "MemberExpression",
            NodeKind::New { .. } => "NewExpression",
            NodeKind::Object { .. } => "ObjectExpression",
            NodeKind::Property { .. } => "Property",
            NodeKind::Sequence { .. } => "SequenceExpression",
            NodeKind::Switch { .. } => "SwitchStatement",
            NodeKind::SwitchCase { .. } => "SwitchCase",
            NodeKind::Try { .. } => "TryStatement",
            NodeKind::VariableDeclaration { .. } => "VariableDeclaration",
            NodeKind::VariableDeclarator { .. } => "VariableDeclarator",
            NodeKind::Other { kind, .. } => kind,
        }
    }
}

impl SyntaxNode {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, loc: None }
    }

    pub fn with_loc(mut self, loc: Loc) -> Self {
        self.loc = Some(loc);
        self
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Identifier { name: name.into() })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Literal(Literal::String(value.into())))
    }

    /// A childless node of an unenumerated kind.
    pub fn leaf(kind: &'static str) -> Self {
        Self::new(NodeKind::Other {
            kind,
            argument: None,
            body: None,
        })
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, NodeKind::Object { .. })
    }
}
