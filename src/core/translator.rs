//! Phrase lookup engine.
//!
//! Phrases are stored flattened: a tree registered under scope `forum`
//! with `{ "menu": { "open": "Open" } }` becomes the key `forum.menu.open`.
//! Leaf values (strings, plural form lists, anything non-object) are kept
//! as is; their syntax belongs to whoever renders them.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde_json::Value;

use super::PhraseTree;

/// Flattened `key -> phrase` table for one locale, sorted by key.
pub type CompiledTable = BTreeMap<String, Value>;

/// What the pipeline needs from a phrase engine.
pub trait PhraseEngine {
    /// Register `phrases` for `locale` under `scope`. Later registrations
    /// override earlier ones key by key.
    fn add_phrase(&mut self, locale: &str, scope: &str, phrases: &PhraseTree);

    /// Everything a client needs to resolve phrases for `locale`.
    fn compiled_data(&self, locale: &str) -> CompiledTable;
}

/// In-memory engine with fallback to a default locale.
#[derive(Debug, Clone)]
pub struct Translator {
    default_locale: String,
    storage: IndexMap<String, CompiledTable>,
}

impl Translator {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            storage: IndexMap::new(),
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Locales holding at least one phrase, in registration order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.storage.keys().map(String::as_str)
    }

    /// Resolve `key` for `locale`, falling back to the default locale.
    pub fn translate(&self, locale: &str, key: &str) -> Option<&Value> {
        self.lookup(locale, key)
            .or_else(|| self.lookup(&self.default_locale, key))
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&Value> {
        self.storage.get(locale).and_then(|table| table.get(key))
    }

    /// Number of phrases registered for `locale`, without fallback.
    pub fn phrase_count(&self, locale: &str) -> usize {
        self.storage.get(locale).map_or(0, BTreeMap::len)
    }
}

impl PhraseEngine for Translator {
    fn add_phrase(&mut self, locale: &str, scope: &str, phrases: &PhraseTree) {
        let table = self.storage.entry(locale.to_string()).or_default();
        flatten_into(table, scope.to_string(), phrases);
    }

    fn compiled_data(&self, locale: &str) -> CompiledTable {
        let mut compiled = self
            .storage
            .get(&self.default_locale)
            .cloned()
            .unwrap_or_default();
        if locale != self.default_locale
            && let Some(table) = self.storage.get(locale)
        {
            compiled.extend(table.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        compiled
    }
}

fn flatten_into(table: &mut CompiledTable, prefix: String, value: &PhraseTree) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(table, child_key, child);
            }
        }
        leaf => {
            table.insert(prefix, leaf.clone());
        }
    }
}
