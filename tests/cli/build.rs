use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_build_writes_bundle_per_package_and_locale() -> Result<()> {
    let test = CliTest::two_packages()?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} Compiled 4 bundles for 2 packages (2 locales) into ./build/i18n\n"
    );
    for path in ["forum/en.js", "forum/ru.js", "users/en.js", "users/ru.js"] {
        assert!(
            test.root().join("build/i18n").join(path).is_file(),
            "missing bundle {path}"
        );
    }

    Ok(())
}

#[test]
fn test_bundles_hold_client_phrases_only() -> Result<()> {
    let test = CliTest::two_packages()?;
    test.build_command().output()?;

    let forum_en = test.read_file("build/i18n/forum/en.js")?;
    assert_snapshot!(forum_en.trim_end(), @r#"i18n.load("en",{"forum.hello":"Hey","forum.title":"Forum"});"#);

    let forum_ru = test.read_file("build/i18n/forum/ru.js")?;
    assert_snapshot!(forum_ru.trim_end(), @r#"i18n.load("ru",{"forum.hello":"Hey","forum.title":"Форум"});"#);

    Ok(())
}

#[test]
fn test_bundles_are_isolated_per_package() -> Result<()> {
    let test = CliTest::two_packages()?;
    test.build_command().output()?;

    let users_ru = test.read_file("build/i18n/users/ru.js")?;
    assert_snapshot!(users_ru.trim_end(), @r#"i18n.load("ru",{"profile.name":"Имя"});"#);

    Ok(())
}

#[test]
fn test_build_is_deterministic() -> Result<()> {
    let test = CliTest::two_packages()?;

    test.build_command().output()?;
    let first = test.read_file("build/i18n/forum/en.js")?;
    test.build_command().output()?;
    let second = test.read_file("build/i18n/forum/en.js")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_build_with_explicit_locales() -> Result<()> {
    let test = CliTest::two_packages()?;

    let output = test
        .build_command()
        .args(["--locale", "ru", "--default-locale", "ru"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("build/i18n/forum/ru.js").is_file());
    assert!(!test.root().join("build/i18n/forum/en.js").exists());

    // Without English enabled there is nothing to fall back to.
    let forum_ru = test.read_file("build/i18n/forum/ru.js")?;
    assert_snapshot!(forum_ru.trim_end(), @r#"i18n.load("ru",{"forum.title":"Форум"});"#);

    Ok(())
}

#[test]
fn test_build_custom_loader_and_output_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".phrasepackrc.json",
        r#"{
  "packages": { "core": { "client": [{ "root": "i18n" }] } },
  "outputDir": "public/assets/i18n",
  "bundle": { "loader": "N.runtime.i18n.load", "extension": "mjs" }
}"#,
    )?;
    test.write_file("i18n/common.json", r#"{ "en": { "ok": "OK" } }"#)?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let bundle = test.read_file("public/assets/i18n/core/en.mjs")?;
    assert_snapshot!(bundle.trim_end(), @r#"N.runtime.i18n.load("en",{"common.ok":"OK"});"#);

    Ok(())
}

#[test]
fn test_build_output_dir_flag() -> Result<()> {
    let test = CliTest::two_packages()?;

    let output = test.build_command().args(["--output-dir", "dist"]).output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.root().join("dist/users/en.js").is_file());
    assert!(!test.root().join("build").exists());

    Ok(())
}

#[test]
fn test_build_fails_on_malformed_source() -> Result<()> {
    let test = CliTest::two_packages()?;
    test.write_file("users/i18n/broken.yml", "en: [unclosed\n")?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Error: Failed to load"), "stderr: {err}");
    assert!(err.contains("broken.yml"), "stderr: {err}");
    assert!(err.contains("invalid YAML"), "stderr: {err}");
    assert!(!test.root().join("build").exists());

    Ok(())
}

#[test]
fn test_build_fails_when_default_locale_not_enabled() -> Result<()> {
    let test = CliTest::two_packages()?;

    let output = test
        .build_command()
        .args(["--locale", "en", "--locale", "fr", "--default-locale", "de"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("Default locale <de> must be enabled (enabled: en, fr)"),
        "stderr: {}",
        stderr(&output)
    );
    assert!(!test.root().join("build").exists());

    Ok(())
}

#[test]
fn test_build_fails_on_missing_lookup_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".phrasepackrc.json",
        r#"{ "packages": { "core": { "server": [{ "root": "nowhere" }] } } }"#,
    )?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("Failed to discover phrase sources under"),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_build_without_any_locale_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No locales enabled"));

    Ok(())
}
