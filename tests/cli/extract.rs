use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, HEADER};

#[test]
fn test_extract_default_config() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        r#"
/// Shown on the landing page
tr("Welcome");
tr("One file", "%d files");
tr("Open", { context: "menu", comment: "File menu" });
"#,
    )?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Extracted 3 messages from javascript files.
    ✓ 3 messages successfully extracted, messages.pot written.

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("messages.pot")?,
        format!(
            "{}{}",
            HEADER,
            "msgid \"Welcome\"\nmsgstr \"\"\n\
             \n\
             msgid \"One file\"\nmsgid_plural \"%d files\"\nmsgstr[0] \"\"\n\
             \n\
             msgid \"Open\"\nmsgstr \"\"\n"
        )
    );

    Ok(())
}

#[test]
fn test_extract_with_config_groups() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".jsgettextrc.json",
        r#"{
  "functionName": ["tr", "i18n.tr"],
  "potFile": "po/app.pot",
  "groups": [
    { "extractor": "javascript", "src": ["web"] },
    { "extractor": "typescript", "src": ["app/**/*.ts"] }
  ]
}"#,
    )?;
    test.write_file("web/b.js", r#"i18n.tr("From b");"#)?;
    test.write_file("web/a.jsx", r#"const el = <p>{tr("From a")}</p>;"#)?;
    test.write_file("web/skip.ts", r#"tr("Wrong extractor");"#)?;
    test.write_file(
        "app/main.ts",
        r#"const title: string = tr("From a"); t("Not a match");"#,
    )?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Extracted 2 messages from javascript files.
    Extracted 1 messages from typescript files.
    ✓ 2 messages successfully extracted, po/app.pot written.

    ----- stderr -----
    ");

    let pot = test.read_file("po/app.pot")?;
    assert_eq!(
        pot,
        format!(
            "{}msgid \"From a\"\nmsgstr \"\"\n\nmsgid \"From b\"\nmsgstr \"\"\n",
            HEADER
        )
    );

    Ok(())
}

#[test]
fn test_extract_cli_overrides() -> Result<()> {
    let test = CliTest::with_file("lib/util.js", r#"_("Underscore"); tr("Default");"#)?;

    let output = test
        .extract_command()
        .args(["--function-name", "_", "--pot-file", "out.pot", "lib"])
        .output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("out.pot")?,
        format!("{}msgid \"Underscore\"\nmsgstr \"\"\n", HEADER)
    );
    assert!(!test.root().join("messages.pot").exists());

    Ok(())
}

#[test]
fn test_extract_source_root() -> Result<()> {
    let test = CliTest::with_file("frontend/src/index.js", r#"tr("Nested root");"#)?;

    let output = test
        .extract_command()
        .args(["--source-root", "frontend"])
        .output()?;
    assert!(output.status.success());

    let pot = test.read_file("frontend/messages.pot")?;
    assert!(pot.contains("msgid \"Nested root\""));

    Ok(())
}

#[test]
fn test_extract_parse_error_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/good.js", r#"tr("Fine");"#)?;
    test.write_file("src/bad.js", "tr(\"Broken\";")?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.js"), "stderr: {}", stderr);
    assert!(!test.root().join("messages.pot").exists());

    Ok(())
}

#[test]
fn test_extract_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file(".jsgettextrc.json", r#"{ "functionName": [] }"#)?;

    let output = test.extract_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("functionName"));

    Ok(())
}

#[test]
fn test_extract_no_sources_writes_header() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/.keep", "")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert_eq!(test.read_file("messages.pot")?, HEADER);

    Ok(())
}

#[test]
fn test_verbose_logs_are_plain_and_not_repeated() -> Result<()> {
    let test = CliTest::with_file("src/app.js", r#"tr("Logged");"#)?;

    let output = test.extract_command().arg("-v").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("1 messages successfully extracted"));
    assert!(stderr.contains("Wrote template"), "stderr: {}", stderr);
    assert!(!stderr.contains('\u{1b}'), "stderr has ANSI codes: {:?}", stderr);
    assert!(!stderr.contains("successfully extracted"));
    assert!(!stderr.contains("Extracted 1 messages"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("extract"));
    assert!(stdout.contains("init"));

    Ok(())
}
