//! Enabled locale resolution.

use serde::Serialize;

use super::{PackageTree, Side};
use crate::{
    config::LocalesConfig,
    error::{PipelineError, Result},
    utils::is_plain_name,
};

/// Default locale plus the ordered list of enabled locales.
///
/// Always non-empty, `default` is always one of `enabled`, and every locale
/// is usable as a bundle file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSet {
    default: String,
    enabled: Vec<String>,
}

impl LocaleSet {
    pub fn new(default: impl Into<String>, enabled: Vec<String>) -> Result<Self> {
        let default = default.into();
        if enabled.is_empty() {
            return Err(PipelineError::NoLocales);
        }
        if let Some(bad) = enabled.iter().find(|locale| !is_plain_name(locale)) {
            return Err(PipelineError::InvalidName {
                kind: "locale",
                name: bad.clone(),
            });
        }
        if !enabled.contains(&default) {
            return Err(PipelineError::DefaultLocaleNotEnabled { default, enabled });
        }
        Ok(Self { default, enabled })
    }

    pub fn default_locale(&self) -> &str {
        &self.default
    }

    pub fn enabled(&self) -> &[String] {
        &self.enabled
    }

    pub fn is_enabled(&self, locale: &str) -> bool {
        self.enabled.iter().any(|l| l == locale)
    }
}

/// Every locale present anywhere in `tree`, in first-seen order.
pub fn available_locales(tree: &PackageTree) -> Vec<String> {
    let mut locales: Vec<String> = Vec::new();
    for package in tree.values() {
        for side in Side::ALL {
            for locale in package.side(side).keys() {
                if !locales.contains(locale) {
                    locales.push(locale.clone());
                }
            }
        }
    }
    locales
}

/// Resolve the locale set from explicit configuration, falling back to the
/// locales found in `tree`.
///
/// An explicit `enabled` list is taken verbatim. Without an explicit
/// default, the first enabled locale is used.
pub fn resolve_locales(tree: &PackageTree, config: &LocalesConfig) -> Result<LocaleSet> {
    let enabled = match &config.enabled {
        Some(enabled) => enabled.clone(),
        None => available_locales(tree),
    };
    let default = match &config.default {
        Some(default) => default.clone(),
        None => enabled.first().cloned().ok_or(PipelineError::NoLocales)?,
    };
    LocaleSet::new(default, enabled)
}
