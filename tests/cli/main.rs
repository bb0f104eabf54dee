use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod build;
mod init;
mod lookup;

const BIN_NAME: &str = "phrasepack";

/// Two packages: `forum` with client and server phrases, `users` with
/// client phrases only.
pub const TWO_PACKAGE_CONFIG: &str = r#"{
  "packages": {
    "forum": {
      "client": [{ "root": "forum/i18n/client" }],
      "server": [{ "root": "forum/i18n/server" }]
    },
    "users": {
      "client": [{ "root": "users/i18n", "patterns": ["**/*.yml"] }]
    }
  }
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// Project with [`TWO_PACKAGE_CONFIG`] and phrases in English and Russian.
    pub fn two_packages() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(".phrasepackrc.json", TWO_PACKAGE_CONFIG)?;
        test.write_file(
            "forum/i18n/client/forum.json",
            r#"{
  "en": { "title": "Forum", "hello": "Hey" },
  "ru": { "title": "Форум" }
}"#,
        )?;
        test.write_file(
            "forum/i18n/server/forum.json",
            r#"{
  "en": { "hello": "Hi", "mail": { "subject": "New post" } }
}"#,
        )?;
        test.write_file(
            "users/i18n/profile.yml",
            "en:\n  name: Name\nru:\n  name: Имя\n",
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn build_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("build");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
