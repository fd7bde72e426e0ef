use crate::core::parsers::source::ParsedSource;

/// Prefix marking a comment line addressed to translators.
pub const TRANSLATOR_COMMENT_PREFIX: &str = "///";

/// Collect the translator comment block directly above `line` (1-indexed).
///
/// Walks upward from the preceding line while lines start with `///`, stopping at
/// the first other line or at the start of the file. Returns the comment texts
/// top-to-bottom, trimmed and joined with newlines, or `None` if there are none.
///
/// Line 1 is eligible too, unlike tools that stop scanning before the first line.
pub fn leading_comment(source: &ParsedSource, line: usize) -> Option<String> {
    let mut collected = Vec::new();
    let mut current = line.saturating_sub(1);

    while let Some(text) = source.line(current) {
        let Some(comment) = text.strip_prefix(TRANSLATOR_COMMENT_PREFIX) else {
            break;
        };
        collected.push(comment.trim());
        current -= 1;
    }

    if collected.is_empty() {
        return None;
    }
    collected.reverse();
    Some(collected.join("\n"))
}
