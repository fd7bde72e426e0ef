//! Gettext template (`.pot`) rendering.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::catalog::{Catalog, Message};

/// Name written into the header line of generated templates.
pub const GENERATOR_NAME: &str = "jsgettext";

/// Quote a string for a template: embedded double quotes are backslash-escaped.
pub fn escape_string(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

fn render_message(message: &Message) -> String {
    let mut buffer = format!("msgid {}\n", escape_string(&message.singular));
    if message.has_plural() {
        buffer.push_str(&format!("msgid_plural {}\n", escape_string(&message.plural)));
        buffer.push_str(&format!("msgstr[0] {}\n", escape_string(&message.message)));
    } else {
        buffer.push_str(&format!("msgstr {}\n", escape_string(&message.message)));
    }
    buffer
}

/// Render a catalog as template text.
///
/// The text starts with a header line recording `generated_at`, followed by one
/// block per message in catalog order, blocks separated by a blank line.
pub fn render(catalog: &Catalog, generated_at: &str) -> String {
    let header = format!("# Generated by {} on {}\n\n", GENERATOR_NAME, generated_at);
    let blocks: Vec<String> = catalog.iter().map(render_message).collect();
    header + blocks.join("\n").as_str()
}

/// Write the rendered template to `path`, replacing any existing file.
pub fn write_template(catalog: &Catalog, path: &Path, generated_at: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, render(catalog, generated_at))
        .with_context(|| format!("Failed to write template: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use tempfile::tempdir;

    fn catalog() -> Catalog {
        [
            Message::new("Hello"),
            Message {
                plural: "Apples".to_string(),
                ..Message::new("Apple")
            },
            Message::new("Say \"hi\""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("plain"), "\"plain\"");
        assert_eq!(escape_string("a \"b\" c"), "\"a \\\"b\\\" c\"");
        assert_eq!(escape_string(""), "\"\"");
    }

    #[test]
    fn test_render() {
        assert_snapshot!(render(&catalog(), "2026-01-01"), @r#"
        # Generated by jsgettext on 2026-01-01

        msgid "Hello"
        msgstr ""

        msgid "Apple"
        msgid_plural "Apples"
        msgstr[0] ""

        msgid "Say \"hi\""
        msgstr ""
        "#);
    }

    #[test]
    fn test_render_empty_catalog() {
        assert_eq!(
            render(&Catalog::new(), "now"),
            "# Generated by jsgettext on now\n\n"
        );
    }

    #[test]
    fn test_blocks_separated_by_single_blank_line() {
        let text = render(&catalog(), "now");
        assert!(text.contains("msgstr \"\"\n\nmsgid \"Apple\""));
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn test_write_template_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("po").join("messages.pot");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale content that is much longer than the new file").unwrap();

        write_template(&[Message::new("x")].into_iter().collect(), &path, "now").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "# Generated by jsgettext on now\n\nmsgid \"x\"\nmsgstr \"\"\n");
    }

    #[test]
    fn test_write_template_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.pot");
        write_template(&Catalog::new(), &path, "now").unwrap();
        assert!(path.exists());
    }
}
