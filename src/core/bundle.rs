//! Per-package, per-locale bundle compilation.
//!
//! Each package gets its own translator built from its client phrases only,
//! so a bundle never carries another package's strings. Output layout:
//!
//! ```text
//! <output>/
//!   <package>/
//!     <locale>.<extension>
//! ```
//!
//! Each file is a single statement that hands the compiled table to the
//! configured loader: `i18n.load("en",{"forum.title":"Forum"});`
//! U+2028, U+2029 and `</` are escaped so a bundle can also be inlined in
//! a `<script>` tag.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use super::{
    LocaleTable, PackageTree,
    locales::LocaleSet,
    translator::{CompiledTable, PhraseEngine, Translator},
};
use crate::{
    config::BundleConfig,
    error::{PipelineError, Result},
    utils::is_plain_name,
};

/// An artifact written by [`compile_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenBundle {
    pub package: String,
    pub locale: String,
    pub path: PathBuf,
}

/// Render the self-loading script for one locale.
pub fn render_bundle(loader: &str, locale: &str, compiled: &CompiledTable) -> String {
    let table: serde_json::Map<String, Value> = compiled
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    format!(
        "{}({},{});\n",
        loader,
        script_safe(&Value::from(locale).to_string()),
        script_safe(&Value::Object(table).to_string())
    )
}

/// Escape sequences that are valid JSON but break inline scripts.
///
/// Only applied to serialized JSON, where these can appear inside string
/// literals only, so the JSON meaning is unchanged.
fn script_safe(json: &str) -> String {
    json.replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
        .replace("</", "<\\/")
}

/// Build a translator holding one package's client phrases for the enabled
/// locales.
pub fn package_translator(client: &LocaleTable, locales: &LocaleSet) -> Translator {
    let mut translator = Translator::new(locales.default_locale());
    for locale in locales.enabled() {
        let Some(scopes) = client.get(locale) else {
            continue;
        };
        for (scope, phrases) in scopes {
            translator.add_phrase(locale, scope, phrases);
        }
    }
    translator
}

/// Compile and write bundles for every package, in configuration order.
///
/// Stops at the first failure. Bundles already written for earlier packages
/// stay on disk.
pub fn compile_all(
    tree: &PackageTree,
    locales: &LocaleSet,
    bundle: &BundleConfig,
    output_dir: &Path,
) -> Result<Vec<WrittenBundle>> {
    let mut written = Vec::new();
    for (package, phrases) in tree {
        if !is_plain_name(package) {
            return Err(PipelineError::InvalidName {
                kind: "package",
                name: package.clone(),
            });
        }
        let translator = package_translator(&phrases.client, locales);
        written.extend(write_package(
            package,
            &translator,
            locales,
            bundle,
            output_dir,
        )?);
    }
    Ok(written)
}

fn write_package(
    package: &str,
    engine: &impl PhraseEngine,
    locales: &LocaleSet,
    bundle: &BundleConfig,
    output_dir: &Path,
) -> Result<Vec<WrittenBundle>> {
    let package_dir = output_dir.join(package);
    fs::create_dir_all(&package_dir).map_err(|source| PipelineError::Output {
        package: package.to_string(),
        locale: None,
        path: package_dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(locales.enabled().len());
    for locale in locales.enabled() {
        let path = package_dir.join(format!("{}.{}", locale, bundle.extension));
        let script = render_bundle(&bundle.loader, locale, &engine.compiled_data(locale));

        fs::write(&path, script).map_err(|source| PipelineError::Output {
            package: package.to_string(),
            locale: Some(locale.clone()),
            path: path.clone(),
            source,
        })?;

        tracing::debug!(%package, %locale, path = %path.display(), "wrote bundle");
        written.push(WrittenBundle {
            package: package.to_string(),
            locale: locale.clone(),
            path,
        });
    }

    Ok(written)
}
