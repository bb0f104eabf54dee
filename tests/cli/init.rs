use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("packages").is_some(),
        "Config should have 'packages' field"
    );
    assert!(
        parsed.get("outputDir").is_some(),
        "Config should have 'outputDir' field"
    );
    assert_eq!(parsed["bundle"]["loader"], "i18n.load");
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .phrasepackrc.json\n");
    assert!(test.root().join(".phrasepackrc.json").exists());

    let content = test.read_file(".phrasepackrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".phrasepackrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".phrasepackrc.json already exists"));
    assert_eq!(test.read_file(".phrasepackrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file("i18n/client/app.yml", "en:\n  title: App\n")?;
    test.write_file("i18n/server/mail.json", r#"{ "en": { "subject": "Hi" } }"#)?;

    let output = test.build_command().output()?;
    assert!(
        output.status.success(),
        "Build should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("build/i18n/app/en.js").is_file());

    Ok(())
}
