use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["languages"], serde_json::json!(["en"]));
    assert_eq!(parsed["fileType"], "array");
    assert_eq!(parsed["fileName"], "lang");
    assert_eq!(parsed["shortKeys"], true);
    assert_eq!(parsed["langRoot"], "lang");
    assert_eq!(parsed["viewsRoot"], "resources/views");
    assert_eq!(parsed["appRoot"], "app");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .langgenrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".langgenrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".langgenrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ .langgenrc.json already exists
    ");

    assert_eq!(test.read_file(".langgenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_generated_config_is_used_by_generate() -> Result<()> {
    let test = CliTest::with_file("resources/views/home.blade.php", "{{ __('home.title') }}")?;

    test.command().arg("init").output()?;
    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join("lang/en/lang.php").is_file());

    Ok(())
}
