use std::path::PathBuf;

use serde_json::Value;

use crate::cli::exit_status::ExitStatus;
use crate::core::{LocaleSet, WrittenBundle};

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Locales(LocalesSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    pub package_count: usize,
    pub locales: LocaleSet,
    /// Output directory as configured, for display.
    pub output_dir: String,
    pub bundles: Vec<WrittenBundle>,
}

#[derive(Debug)]
pub struct LocalesSummary {
    pub locales: LocaleSet,
    /// Configured packages that contributed no phrases at all.
    pub empty_packages: Vec<String>,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub locale: String,
    pub key: String,
    pub value: Option<Value>,
    /// True when `locale` is not in the enabled set, so only the default
    /// locale could answer.
    pub locale_disabled: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a phrasepack command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            status: ExitStatus::Success,
        }
    }
}
