//! Phrase source discovery.
//!
//! Each lookup spec names a root directory and glob patterns relative to it.
//! Files are visited in file-name order, so the candidate list (and every
//! merge built from it) is the same on every run and every platform.

use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::{
    config::LookupSpec,
    error::{PipelineError, Result},
};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A discovered phrase source and the scope it populates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub location: PathBuf,
    pub api_key: String,
}

/// Expand `specs` into candidates.
///
/// Spec order is preserved, and within a spec files come in traversal order.
/// A file matched twice (by overlapping patterns or specs) is kept only at
/// its first position. Any unreadable root or entry fails the whole call.
pub fn resolve_candidates(base_dir: &Path, specs: &[LookupSpec]) -> Result<Vec<Candidate>> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut candidates = Vec::new();

    for spec in specs {
        let root = base_dir.join(&spec.root);
        let patterns = compile_patterns(&spec.patterns)?;
        // walkdir yields a file root as its own single entry, which would
        // never match a relative pattern.
        if root.exists() && !root.is_dir() {
            return Err(PipelineError::RootNotADirectory { root });
        }

        for entry in WalkDir::new(&root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|source| PipelineError::Discovery {
                root: root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&root) else {
                continue;
            };
            if !patterns
                .iter()
                .any(|p| p.matches_path_with(relative, MATCH_OPTIONS))
            {
                continue;
            }

            let api_key = api_key_for(relative);
            if !seen.insert(entry.path().to_path_buf()) {
                tracing::debug!(path = %entry.path().display(), "skipping duplicate candidate");
                continue;
            }

            tracing::debug!(path = %entry.path().display(), api = %api_key, "found phrase source");
            candidates.push(Candidate {
                location: entry.into_path(),
                api_key,
            });
        }
    }

    Ok(candidates)
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| PipelineError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Derive the scope name from a path relative to its lookup root.
///
/// The extension is dropped and directory separators become dots:
/// `users/profile.yml` -> `users.profile`.
pub fn api_key_for(relative: &Path) -> String {
    relative
        .with_extension("")
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}
