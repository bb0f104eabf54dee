//! Pipeline driver.
//!
//! A [`PipelineContext`] is built once per run from the loaded configuration.
//! Nothing is global: the resolved locale set and the runtime translator
//! are returned to the caller, who decides what to expose.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use super::{
    PackageTree,
    bundle::{WrittenBundle, compile_all},
    collect::build_package_tree,
    locales::{LocaleSet, resolve_locales},
    registrar::register_runtime,
    translator::Translator,
};
use crate::{config::Config, error::Result};

/// Configuration plus the directory relative paths resolve against.
#[derive(Debug)]
pub struct PipelineContext {
    base_dir: PathBuf,
    config: Config,
}

/// Result of collection, locale resolution and runtime registration.
#[derive(Debug)]
pub struct PreparedTranslations {
    pub tree: PackageTree,
    pub locales: LocaleSet,
    pub translator: Translator,
}

/// Result of a full run.
#[derive(Debug)]
pub struct PipelineOutput {
    pub locales: LocaleSet,
    pub translator: Translator,
    pub bundles: Vec<WrittenBundle>,
    pub package_count: usize,
}

impl PipelineContext {
    pub fn new(base_dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            base_dir: base_dir.into(),
            config,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.output_dir)
    }

    /// Collect all phrases, resolve locales and build the runtime translator.
    pub fn prepare(&self) -> Result<PreparedTranslations> {
        let started = Instant::now();

        let tree = build_package_tree(&self.base_dir, &self.config.packages)?;
        let locales = resolve_locales(&tree, &self.config.locales)?;
        tracing::debug!(
            default = %locales.default_locale(),
            enabled = ?locales.enabled(),
            "resolved locales"
        );
        let translator = register_runtime(&tree, &locales);

        tracing::info!(
            packages = tree.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "collected translations"
        );
        Ok(PreparedTranslations {
            tree,
            locales,
            translator,
        })
    }

    /// Run every stage and write bundles under [`Self::output_dir`].
    pub fn run(&self) -> Result<PipelineOutput> {
        let started = Instant::now();
        let PreparedTranslations {
            tree,
            locales,
            translator,
        } = self.prepare()?;

        let bundles = compile_all(&tree, &locales, &self.config.bundle, &self.output_dir())?;

        tracing::info!(
            bundles = bundles.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "processed i18n sections"
        );
        Ok(PipelineOutput {
            locales,
            translator,
            bundles,
            package_count: tree.len(),
        })
    }
}
