use anyhow::Result;

use super::{BuildSummary, CommandResult, CommandSummary, context::pipeline_context};
use crate::cli::args::BuildCommand;

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let ctx = pipeline_context(&cmd.common, cmd.output_dir.as_ref())?;
    let output = ctx.run()?;

    Ok(CommandResult::success(CommandSummary::Build(BuildSummary {
        package_count: output.package_count,
        locales: output.locales,
        output_dir: ctx.config().output_dir.clone(),
        bundles: output.bundles,
    })))
}
