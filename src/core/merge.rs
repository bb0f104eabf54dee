//! Recursive merge of phrase trees.
//!
//! Objects are branches, everything else is a leaf. Branches merge key-wise;
//! any other combination (leaf over leaf, leaf over branch, branch over
//! leaf) replaces the target with the source.

use serde_json::{Map, Value};

use super::{LocaleTable, PhraseTree};

/// Merge `source` into `target`, with `source` winning on conflicts.
///
/// Keys new to `target` are appended in `source` order, so the result is
/// deterministic as long as the merge order is.
pub fn deep_merge(target: &mut PhraseTree, source: PhraseTree) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => merge_maps(target, source),
        (target, source) => *target = source,
    }
}

/// Merge two branch maps key by key.
pub fn merge_maps(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(existing) => deep_merge(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// Merge a whole `locale -> scope -> phrases` table into another.
///
/// Scopes present on both sides are deep-merged, `source` winning.
pub fn merge_locale_tables(target: &mut LocaleTable, source: LocaleTable) {
    for (locale, scopes) in source {
        let target_scopes = target.entry(locale).or_default();
        for (scope, phrases) in scopes {
            match target_scopes.get_mut(&scope) {
                Some(existing) => deep_merge(existing, phrases),
                None => {
                    target_scopes.insert(scope, phrases);
                }
            }
        }
    }
}
