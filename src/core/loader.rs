//! Phrase source parsing.
//!
//! A source is plain data: a mapping of locale code to a phrase tree.
//! Nothing in a source is ever evaluated.

use std::{fs, path::Path};

use indexmap::IndexMap;
use serde_json::Value;

use super::{PhraseTree, resolve::Candidate};
use crate::error::{LoadError, PipelineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match extension {
            "json" => Ok(SourceFormat::Json),
            "yml" | "yaml" => Ok(SourceFormat::Yaml),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Load one candidate, wrapping any failure with its location.
pub fn load_source(candidate: &Candidate) -> Result<IndexMap<String, PhraseTree>> {
    read_phrases(&candidate.location).map_err(|source| PipelineError::SourceLoad {
        location: candidate.location.clone(),
        source,
    })
}

fn read_phrases(path: &Path) -> Result<IndexMap<String, PhraseTree>, LoadError> {
    let format = SourceFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_phrases(&content, format)
}

/// Parse source text into `locale -> phrases`.
///
/// Blank input is an empty mapping; any top level other than a mapping is
/// rejected.
pub fn parse_phrases(
    content: &str,
    format: SourceFormat,
) -> Result<IndexMap<String, PhraseTree>, LoadError> {
    if content.trim().is_empty() {
        return Ok(IndexMap::new());
    }

    let value: Value = match format {
        SourceFormat::Json => serde_json::from_str(content)?,
        SourceFormat::Yaml => serde_yaml::from_str(content)?,
    };

    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        Value::Null => Ok(IndexMap::new()),
        other => Err(LoadError::NotAMapping(value_kind(&other))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
