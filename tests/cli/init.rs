use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["functionName"], "tr");
    assert_eq!(parsed["potFile"], "messages.pot");
    assert_eq!(parsed["groups"][0]["extractor"], "javascript");
    assert_eq!(parsed["groups"][0]["src"][0], "src");

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .jsgettextrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".jsgettextrc.json").exists());
    let content = test.read_file(".jsgettextrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".jsgettextrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .jsgettextrc.json already exists
    ");

    assert_eq!(test.read_file(".jsgettextrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.js", r#"tr("Ready");"#)?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.read_file("messages.pot")?.contains("msgid \"Ready\""));

    Ok(())
}
