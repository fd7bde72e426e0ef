//! Reduce constant-valued subtrees to strings.
//!
//! Unsupported shapes never fail: they flatten to an empty string and are
//! reported at debug level.

use crate::core::syntax::{Literal, NodeKind, SyntaxNode};

/// Flatten a (possibly dotted) function name.
///
/// - `tr` → `"tr"`
/// - `i18n.tr` → `"i18n.tr"`
/// - `app.i18n.tr` → `"app.i18n.tr"`
/// - `obj[name]`, `getTr()` → `""`
pub fn flatten_identifier(node: &SyntaxNode) -> String {
    match &node.kind {
        NodeKind::Identifier { name } => name.clone(),
        NodeKind::Member {
            object,
            property,
            computed: false,
        } => match (&object.kind, &property.kind) {
            (NodeKind::Identifier { name: object }, NodeKind::Identifier { name: property }) => {
                format!("{}.{}", object, property)
            }
            (NodeKind::Member { .. }, NodeKind::Identifier { name: property }) => {
                format!("{}.{}", flatten_identifier(object), property)
            }
            _ => unhandled_identifier(node),
        },
        _ => unhandled_identifier(node),
    }
}

fn unhandled_identifier(node: &SyntaxNode) -> String {
    tracing::debug!(kind = node.kind.name(), "Found unhandled identifier: {:?}", node);
    String::new()
}

/// Flatten a string literal or a `+` concatenation of string literals.
///
/// Operands of a concatenation that are not themselves flattenable contribute an
/// empty string, so `"Hello " + name` flattens to `"Hello "`.
pub fn flatten_string(node: &SyntaxNode) -> String {
    match &node.kind {
        NodeKind::Literal(Literal::String(value)) => value.clone(),
        NodeKind::Binary {
            operator,
            left,
            right,
        } if operator == "+" => flatten_string(left) + flatten_string(right).as_str(),
        _ => {
            tracing::debug!(kind = node.kind.name(), "Found unhandled string: {:?}", node);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(object: SyntaxNode, property: &str) -> SyntaxNode {
        SyntaxNode::new(NodeKind::Member {
            object: Box::new(object),
            property: Box::new(SyntaxNode::identifier(property)),
            computed: false,
        })
    }

    fn concat(left: SyntaxNode, right: SyntaxNode) -> SyntaxNode {
        binary("+", left, right)
    }

    fn binary(operator: &str, left: SyntaxNode, right: SyntaxNode) -> SyntaxNode {
        SyntaxNode::new(NodeKind::Binary {
            operator: operator.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    #[test]
    fn test_flatten_plain_identifier() {
        assert_eq!(flatten_identifier(&SyntaxNode::identifier("tr")), "tr");
    }

    #[test]
    fn test_flatten_member_identifier() {
        let node = member(SyntaxNode::identifier("i18n"), "tr");
        assert_eq!(flatten_identifier(&node), "i18n.tr");
    }

    #[test]
    fn test_flatten_nested_member_identifier() {
        let node = member(member(SyntaxNode::identifier("app"), "i18n"), "tr");
        assert_eq!(flatten_identifier(&node), "app.i18n.tr");
    }

    #[test]
    fn test_flatten_computed_member_is_unhandled() {
        let node = SyntaxNode::new(NodeKind::Member {
            object: Box::new(SyntaxNode::identifier("i18n")),
            property: Box::new(SyntaxNode::string("tr")),
            computed: true,
        });
        assert_eq!(flatten_identifier(&node), "");
    }

    #[test]
    fn test_flatten_call_callee_is_unhandled() {
        let node = SyntaxNode::new(NodeKind::Call {
            callee: Box::new(SyntaxNode::identifier("getTr")),
            arguments: vec![],
        });
        assert_eq!(flatten_identifier(&node), "");
    }

    #[test]
    fn test_flatten_string_literal() {
        assert_eq!(flatten_string(&SyntaxNode::string("Hello")), "Hello");
    }

    #[test]
    fn test_flatten_string_concatenation_chain() {
        let node = concat(
            concat(SyntaxNode::string("foo"), SyntaxNode::string("bar")),
            SyntaxNode::string("baz"),
        );
        assert_eq!(flatten_string(&node), "foobarbaz");
    }

    #[test]
    fn test_flatten_string_with_variable_operand_degrades() {
        let node = concat(SyntaxNode::string("Hello "), SyntaxNode::identifier("name"));
        assert_eq!(flatten_string(&node), "Hello ");
    }

    #[test]
    fn test_flatten_string_other_operator() {
        let node = binary("-", SyntaxNode::string("a"), SyntaxNode::string("b"));
        assert_eq!(flatten_string(&node), "");
    }

    #[test]
    fn test_flatten_string_non_string_literal() {
        let node = SyntaxNode::new(NodeKind::Literal(Literal::Number(42.0)));
        assert_eq!(flatten_string(&node), "");
        assert_eq!(flatten_string(&SyntaxNode::identifier("x")), "");
    }
}
