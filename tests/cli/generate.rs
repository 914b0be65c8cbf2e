use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const AUTH_VIEW: &str = r#"
<p>{{ __('auth.failed') }}</p>
<p>{{ trans('auth.failed', ['attr' => 1]) }}</p>
"#;

#[test]
fn test_generate_nested_php_dictionary() -> Result<()> {
    let test = CliTest::with_file("resources/views/auth/login.blade.php", AUTH_VIEW)?;
    let _filters = test.bind_filters();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Parsing views folder...
    Views parse finished. Found 1 keys in 1 files
    Parsing app folder...
    App parse finished. Found 0 keys in 0 files
    Total keys found: 1
    ✓ Generated [TEMP]/lang/en/lang.php

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("lang/en/lang.php")?,
        "<?php\n\nreturn [\n    'auth' => [\n        'failed' => 'auth.failed',\n    ],\n];\n"
    );

    Ok(())
}

#[test]
fn test_generate_counts_views_and_app() -> Result<()> {
    let test = CliTest::with_file("resources/views/auth/login.blade.php", AUTH_VIEW)?;
    test.write_file(
        "app/Http/Controllers/HomeController.php",
        "<?php return back()->with('status', __('Saved!'));",
    )?;
    let _filters = test.bind_filters();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Parsing views folder...
    Views parse finished. Found 1 keys in 1 files
    Parsing app folder...
    App parse finished. Found 1 keys in 1 files
    Total keys found: 2
    ✓ Generated [TEMP]/lang/en/lang.php

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_generate_json_for_each_locale() -> Result<()> {
    let test = CliTest::with_file("resources/views/welcome.blade.php", AUTH_VIEW)?;
    let _filters = test.bind_filters();

    assert_cmd_snapshot!(
        test.generate_command().args(["--type", "json", "--lang", "en,fr"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Parsing views folder...
    Views parse finished. Found 1 keys in 1 files
    Parsing app folder...
    App parse finished. Found 0 keys in 0 files
    Total keys found: 1
    ✓ Generated [TEMP]/lang/en.json
    ✓ Generated [TEMP]/lang/fr.json

    ----- stderr -----
    "
    );

    let expected = "{\n    \"auth.failed\": \"auth.failed\"\n}\n";
    assert_eq!(test.read_file("lang/en.json")?, expected);
    assert_eq!(test.read_file("lang/fr.json")?, expected);

    Ok(())
}

#[test]
fn test_generate_keeps_translated_values() -> Result<()> {
    let test = CliTest::with_file("resources/views/welcome.blade.php", AUTH_VIEW)?;
    let existing = "<?php\n\nreturn [\n    'auth' => [\n        'failed' => 'These credentials do not match.',\n    ],\n    'old' => 'Old',\n];\n";
    test.write_file("lang/en/lang.php", existing)?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("lang/en/lang.php")?, existing);

    Ok(())
}

#[test]
fn test_generate_sync_removes_unused_keys() -> Result<()> {
    let test = CliTest::with_file("resources/views/welcome.blade.php", AUTH_VIEW)?;
    test.write_file(
        "lang/en.json",
        r#"{ "auth.failed": "Wrong password", "unused": "Gone" }"#,
    )?;

    let output = test
        .generate_command()
        .args(["--type", "json", "--sync"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("lang/en.json")?,
        "{\n    \"auth.failed\": \"Wrong password\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_generate_sync_keeps_literal_entry_in_nested_dictionary() -> Result<()> {
    let test = CliTest::with_file("resources/views/welcome.blade.php", AUTH_VIEW)?;
    test.write_file(
        "lang/en/lang.php",
        "<?php\n\nreturn [\n    'auth.failed' => 'Wrong password',\n    'auth.gone' => 'Gone',\n];\n",
    )?;

    let output = test.generate_command().arg("--sync").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("lang/en/lang.php")?,
        "<?php\n\nreturn [\n    'auth' => [\n        'failed' => 'auth.failed',\n    ],\n    'auth.failed' => 'Wrong password',\n];\n"
    );

    Ok(())
}

#[test]
fn test_generate_new_discards_existing() -> Result<()> {
    let test = CliTest::with_file("resources/views/welcome.blade.php", AUTH_VIEW)?;
    test.write_file("lang/en.json", r#"{ "auth.failed": "Wrong password" }"#)?;

    let output = test
        .generate_command()
        .args(["--type", "json", "--new"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("lang/en.json")?,
        "{\n    \"auth.failed\": \"auth.failed\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".langgenrc.json",
        r#"{ "languages": ["de"], "fileName": "messages", "viewsRoot": "templates" }"#,
    )?;
    test.write_file("templates/page.html", "@lang('page.title')")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("lang/de/messages.php")?,
        "<?php\n\nreturn [\n    'page' => [\n        'title' => 'page.title',\n    ],\n];\n"
    );

    Ok(())
}

#[test]
fn test_generate_custom_path() -> Result<()> {
    let test = CliTest::with_file("resources/views/ignored.blade.php", "{{ __('views.key') }}")?;
    test.write_file("modules/Blog/post.blade.php", "{{ __('blog.title') }}")?;
    let _filters = test.bind_filters();

    assert_cmd_snapshot!(
        test.generate_command().args(["--path", "modules", "--no-short-keys"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Parsing custom path...
    Path: [TEMP]/modules
    Custom path parse finished. Found 1 keys in 1 files
    Total keys found: 1
    ✓ Generated [TEMP]/lang/en/lang.php

    ----- stderr -----
    "
    );

    assert_eq!(
        test.read_file("lang/en/lang.php")?,
        "<?php\n\nreturn [\n    'blog.title' => 'blog.title',\n];\n"
    );

    Ok(())
}

#[test]
fn test_generate_missing_custom_path_is_error() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.bind_filters();

    assert_cmd_snapshot!(test.generate_command().args(["--path", "nowhere"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Can't find the specified directory: [TEMP]/nowhere. Please check the --path parameter
    ");

    assert!(!test.root().join("lang").exists());

    Ok(())
}

#[test]
fn test_generate_empty_custom_path_is_error() -> Result<()> {
    let test = CliTest::with_file("modules/readme.txt", "no translations here")?;
    let _filters = test.bind_filters();

    assert_cmd_snapshot!(test.generate_command().args(["--path", "modules"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----
    Parsing custom path...
    Path: [TEMP]/modules
    Custom path parse finished. Found 0 keys in 1 files
    Total keys found: 0

    ----- stderr -----
    Error: Nothing to generate. No translation keys found in [TEMP]/modules
    ");

    assert!(!test.root().join("lang").exists());

    Ok(())
}

#[test]
fn test_generate_malformed_dictionary_is_error() -> Result<()> {
    let test = CliTest::with_file("resources/views/welcome.blade.php", AUTH_VIEW)?;
    test.write_file("lang/en/lang.php", "<?php return ['a' => 'x'")?;
    let _filters = test.bind_filters();

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----
    Parsing views folder...
    Views parse finished. Found 1 keys in 1 files
    Parsing app folder...
    App parse finished. Found 0 keys in 0 files
    Total keys found: 1

    ----- stderr -----
    Error: Failed to parse dictionary file [TEMP]/lang/en/lang.php: expected ',' or end of array (line 1)
    ");

    assert_eq!(test.read_file("lang/en/lang.php")?, "<?php return ['a' => 'x'");

    Ok(())
}

#[test]
fn test_no_subcommand_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
