//! Collection of phrase sources into locale tables.
//!
//! Iteration order is part of the contract, because later sources override
//! earlier ones:
//! - packages in configuration order
//! - sides as client, then server
//! - candidates in discovery order
//!
//! Every loop stops at the first error.

use std::path::Path;

use indexmap::IndexMap;

use super::{
    LocaleTable, PackagePhrases, PackageTree, Side, loader::load_source, merge::deep_merge,
    resolve::resolve_candidates,
};
use crate::{
    config::{LookupSpec, PackageConfig},
    error::Result,
};

/// Collect every phrase source matched by `specs` into one locale table.
///
/// Two sources feeding the same `(locale, scope)` are deep-merged, the later
/// one winning on conflicting keys.
pub fn collect_translations(base_dir: &Path, specs: &[LookupSpec]) -> Result<LocaleTable> {
    let candidates = resolve_candidates(base_dir, specs)?;
    let mut table = LocaleTable::new();

    for candidate in &candidates {
        let phrases = load_source(candidate)?;
        for (locale, tree) in phrases {
            let scopes = table.entry(locale).or_default();
            match scopes.get_mut(&candidate.api_key) {
                Some(existing) => deep_merge(existing, tree),
                None => {
                    scopes.insert(candidate.api_key.clone(), tree);
                }
            }
        }
    }

    tracing::debug!(
        sources = candidates.len(),
        locales = table.len(),
        "collected phrase sources"
    );
    Ok(table)
}

/// Build the full `package -> side -> locale -> scope` tree.
///
/// A side without lookup specs yields an empty table.
pub fn build_package_tree(
    base_dir: &Path,
    packages: &IndexMap<String, PackageConfig>,
) -> Result<PackageTree> {
    let mut tree = PackageTree::new();

    for (name, package) in packages {
        let mut phrases = PackagePhrases::default();
        for side in Side::ALL {
            let Some(specs) = package.lookup(side) else {
                continue;
            };
            tracing::debug!(package = %name, %side, "collecting translations");
            *phrases.side_mut(side) = collect_translations(base_dir, specs)?;
        }
        tree.insert(name.clone(), phrases);
    }

    Ok(tree)
}
