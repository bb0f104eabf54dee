//! Error types for the translation pipeline.
//!
//! Every stage returns the first error it hits and the whole run aborts.
//! Each variant carries enough context (root, source location, package,
//! locale) to point at the offending input. Underlying causes are exposed
//! through `source()`, not repeated in the message; print with `{:#}` via
//! `anyhow` to see the full chain.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure while reading or parsing a single phrase source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file")]
    Io(#[from] io::Error),

    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported phrase source format '{0}' (expected .json, .yml or .yaml)")]
    UnsupportedFormat(String),

    #[error("expected a mapping of locale to phrases, found {0}")]
    NotAMapping(&'static str),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to discover phrase sources under '{}'", .root.display())]
    Discovery {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Lookup root '{}' is not a directory", .root.display())]
    RootNotADirectory { root: PathBuf },

    #[error("Invalid lookup pattern \"{pattern}\"")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to load {}", .location.display())]
    SourceLoad {
        location: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("Default locale <{default}> must be enabled (enabled: {})", .enabled.join(", "))]
    DefaultLocaleNotEnabled {
        default: String,
        enabled: Vec<String>,
    },

    #[error("Invalid {kind} name \"{name}\": must be a single path component")]
    InvalidName { kind: &'static str, name: String },

    #[error("No locales enabled: none configured and no phrase sources declare any")]
    NoLocales,

    #[error("{}", output_context(.package, .locale.as_deref(), .path))]
    Output {
        package: String,
        locale: Option<String>,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn output_context(package: &str, locale: Option<&str>, path: &std::path::Path) -> String {
    match locale {
        Some(locale) => format!(
            "Failed to write bundle for package '{}', locale '{}' to '{}'",
            package,
            locale,
            path.display()
        ),
        None => format!(
            "Failed to create output directory for package '{}' at '{}'",
            package,
            path.display()
        ),
    }
}

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
