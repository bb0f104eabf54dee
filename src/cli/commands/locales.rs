use anyhow::Result;

use super::{CommandResult, CommandSummary, LocalesSummary, context::pipeline_context};
use crate::cli::args::LocalesCommand;

pub fn locales(cmd: LocalesCommand) -> Result<CommandResult> {
    let ctx = pipeline_context(&cmd.common, None)?;
    let prepared = ctx.prepare()?;

    let empty_packages = prepared
        .tree
        .iter()
        .filter(|(_, phrases)| phrases.client.is_empty() && phrases.server.is_empty())
        .map(|(name, _)| name.clone())
        .collect();

    Ok(CommandResult::success(CommandSummary::Locales(
        LocalesSummary {
            locales: prepared.locales,
            empty_packages,
        },
    )))
}
