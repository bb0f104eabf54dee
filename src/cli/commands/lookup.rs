use anyhow::Result;

use super::{CommandResult, CommandSummary, LookupSummary, context::pipeline_context};
use crate::cli::{args::LookupCommand, exit_status::ExitStatus};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = pipeline_context(&cmd.common, None)?;
    let prepared = ctx.prepare()?;

    let value = prepared.translator.translate(&cmd.locale, &cmd.key).cloned();
    let status = if value.is_some() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    };

    Ok(CommandResult {
        summary: CommandSummary::Lookup(LookupSummary {
            locale_disabled: !prepared.locales.is_enabled(&cmd.locale),
            locale: cmd.locale,
            key: cmd.key,
            value,
        }),
        status,
    })
}
