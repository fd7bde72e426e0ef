//! Turn a matched translation call into a [`Message`].
//!
//! Supported call shapes:
//!
//! ```text
//! tr(singular)
//! tr(singular, { context, comment })
//! tr(singular, plural)
//! tr(singular, plural, { context, comment })
//! ```

use crate::core::catalog::Message;
use crate::core::extract::comments::leading_comment;
use crate::core::extract::flatten::flatten_string;
use crate::core::extract::options::OptionsBag;
use crate::core::parsers::source::ParsedSource;
use crate::core::syntax::{Loc, SyntaxNode};

/// Build a message from the arguments of a translation call.
///
/// Returns `None` when the call has no arguments or the singular flattens to an
/// empty string.
pub fn parse_invocation(
    arguments: &[SyntaxNode],
    loc: Option<Loc>,
    source: &ParsedSource,
) -> Option<Message> {
    let Some(first) = arguments.first() else {
        tracing::debug!(?loc, "No arguments to translation method");
        return None;
    };

    let singular = flatten_string(first);

    let (plural, options) = match arguments.get(1) {
        Some(second) if second.is_object() => (String::new(), OptionsBag::parse(second)),
        Some(second) => (
            flatten_string(second),
            arguments.get(2).map(OptionsBag::parse).unwrap_or_default(),
        ),
        None => (String::new(), OptionsBag::default()),
    };

    let mut comment = options.comment().to_string();
    if let Some(leading) = loc.and_then(|loc| leading_comment(source, loc.line)) {
        comment = if comment.is_empty() {
            leading
        } else {
            format!("{}\n{}", leading, comment)
        };
    }

    if singular.is_empty() {
        tracing::debug!(?loc, "Dropping translation call with empty singular");
        return None;
    }

    Some(Message {
        singular,
        plural,
        context: options.context().to_string(),
        comment,
        message: String::new(),
    })
}
