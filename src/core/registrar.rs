//! Runtime translator setup.

use super::{
    LocaleTable, PackageTree, locales::LocaleSet, merge::merge_locale_tables,
    translator::{PhraseEngine, Translator},
};

/// Merge every package's client phrases over its server phrases.
///
/// Client phrases win on conflicting keys. Packages are folded in
/// configuration order, so a later package overrides an earlier one.
pub fn combined_table(tree: &PackageTree) -> LocaleTable {
    let mut combined = LocaleTable::new();
    for package in tree.values() {
        merge_locale_tables(&mut combined, package.server.clone());
        merge_locale_tables(&mut combined, package.client.clone());
    }
    combined
}

/// Build the process-wide translator from all packages, limited to the
/// enabled locales.
pub fn register_runtime(tree: &PackageTree, locales: &LocaleSet) -> Translator {
    let combined = combined_table(tree);
    let mut translator = Translator::new(locales.default_locale());

    for locale in locales.enabled() {
        let Some(scopes) = combined.get(locale) else {
            continue;
        };
        for (scope, phrases) in scopes {
            translator.add_phrase(locale, scope, phrases);
        }
    }

    translator
}
