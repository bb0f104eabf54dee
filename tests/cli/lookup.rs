use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_lookup_prefers_client_phrases() -> Result<()> {
    let test = CliTest::two_packages()?;

    let output = test
        .command()
        .args(["lookup", "en", "forum.hello"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "\"Hey\"\n");

    Ok(())
}

#[test]
fn test_lookup_sees_server_phrases() -> Result<()> {
    let test = CliTest::two_packages()?;

    let output = test
        .command()
        .args(["lookup", "en", "forum.mail.subject"])
        .output()?;

    assert_eq!(stdout(&output), "\"New post\"\n");

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_default_locale() -> Result<()> {
    let test = CliTest::two_packages()?;

    let output = test
        .command()
        .args(["lookup", "ru", "forum.mail.subject"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\"New post\"\n");

    Ok(())
}

#[test]
fn test_lookup_miss_exits_with_failure() -> Result<()> {
    let test = CliTest::two_packages()?;

    let output = test
        .command()
        .args(["lookup", "ru", "forum.nothing"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("No phrase 'forum.nothing' for locale 'ru'"));

    Ok(())
}

#[test]
fn test_lookup_disabled_locale_warns() -> Result<()> {
    let test = CliTest::two_packages()?;

    let output = test
        .command()
        .args(["lookup", "de", "profile.name", "--root", "."])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\"Name\"\n");
    assert!(stderr(&output).contains("locale 'de' is not enabled"));

    Ok(())
}
