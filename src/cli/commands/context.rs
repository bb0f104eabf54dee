//! Config loading shared by the pipeline commands.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::cli::args::CommonArgs;
use crate::config::{ConfigLoadResult, load_config};
use crate::core::PipelineContext;

/// Load the config for `common.root` (or the current directory) and apply
/// command line overrides.
pub fn pipeline_context(
    common: &CommonArgs,
    output_dir: Option<&PathBuf>,
) -> Result<PipelineContext> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let start_dir = match &common.root {
        Some(root) => cwd.join(root),
        None => cwd.clone(),
    };

    let ConfigLoadResult {
        mut config,
        base_dir,
        from_file,
    } = load_config(&start_dir)?;

    if !from_file {
        tracing::warn!(
            dir = %start_dir.display(),
            "no config file found, using defaults"
        );
    }

    if let Some(default) = &common.default_locale {
        config.locales.default = Some(default.clone());
    }
    if !common.locales.is_empty() {
        config.locales.enabled = Some(common.locales.clone());
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = cwd.join(output_dir).to_string_lossy().into_owned();
    }

    Ok(PipelineContext::new(base_dir, config))
}
