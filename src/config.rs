use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Side;

pub const CONFIG_FILE_NAME: &str = ".phrasepackrc.json";

pub const DEFAULT_SOURCE_PATTERNS: &[&str] = &["**/*.json", "**/*.yml", "**/*.yaml"];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Packages in the order they are processed.
    #[serde(default)]
    pub packages: IndexMap<String, PackageConfig>,
    #[serde(default, skip_serializing_if = "LocalesConfig::is_empty")]
    pub locales: LocalesConfig,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub bundle: BundleConfig,
}

/// Where to find one package's phrase sources. Either side may be absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PackageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<Vec<LookupSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<Vec<LookupSpec>>,
}

impl PackageConfig {
    pub fn lookup(&self, side: Side) -> Option<&[LookupSpec]> {
        match side {
            Side::Client => self.client.as_deref(),
            Side::Server => self.server.as_deref(),
        }
    }
}

/// A root directory and the glob patterns, relative to it, naming phrase
/// sources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LookupSpec {
    pub root: PathBuf,
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocalesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Vec<String>>,
}

impl LocalesConfig {
    fn is_empty(&self) -> bool {
        self.default.is_none() && self.enabled.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BundleConfig {
    /// Expression each bundle calls with `(locale, table)`.
    #[serde(default = "default_loader")]
    pub loader: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_output_dir() -> String {
    "./build/i18n".to_string()
}

fn default_patterns() -> Vec<String> {
    DEFAULT_SOURCE_PATTERNS.iter().map(|p| p.to_string()).collect()
}

fn default_loader() -> String {
    "i18n.load".to_string()
}

fn default_extension() -> String {
    "js".to_string()
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            loader: default_loader(),
            extension: default_extension(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packages: IndexMap::new(),
            locales: LocalesConfig::default(),
            output_dir: default_output_dir(),
            bundle: BundleConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid lookup patterns, an explicitly empty `locales.enabled`
    /// and a blank bundle loader or extension.
    pub fn validate(&self) -> Result<()> {
        for (name, package) in &self.packages {
            for side in Side::ALL {
                for spec in package.lookup(side).unwrap_or_default() {
                    for pattern in &spec.patterns {
                        Pattern::new(pattern).with_context(|| {
                            format!(
                                "Invalid glob pattern in 'packages.{}.{}': \"{}\"",
                                name, side, pattern
                            )
                        })?;
                    }
                }
            }
        }

        if let Some(enabled) = &self.locales.enabled
            && enabled.is_empty()
        {
            bail!("'locales.enabled' must list at least one locale when set");
        }

        if self.bundle.loader.trim().is_empty() {
            bail!("'bundle.loader' must not be empty");
        }
        if self.bundle.extension.trim().is_empty() {
            bail!("'bundle.extension' must not be empty");
        }

        Ok(())
    }
}

/// Default config written by `phrasepack init`: one package reading client
/// and server phrases from conventional directories.
pub fn default_config_json() -> Result<String> {
    let mut config = Config::default();
    config.packages.insert(
        "app".to_string(),
        PackageConfig {
            client: Some(vec![LookupSpec {
                root: PathBuf::from("i18n/client"),
                patterns: default_patterns(),
            }]),
            server: Some(vec![LookupSpec {
                root: PathBuf::from("i18n/server"),
                patterns: default_patterns(),
            }]),
        },
    );
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
