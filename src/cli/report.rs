//! Report formatting and printing utilities.
//!
//! Separate from the pipeline so phrasepack can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    BuildSummary, CommandResult, CommandSummary, InitSummary, LocalesSummary, LookupSummary,
};
use crate::utils::pluralize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result: results to stdout, misses to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, verbose, out),
        CommandSummary::Locales(summary) => print_locales(summary, out, err),
        CommandSummary::Lookup(summary) => print_lookup(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

fn print_build<W: Write>(summary: &BuildSummary, verbose: bool, out: &mut W) {
    if verbose {
        for bundle in &summary.bundles {
            let _ = writeln!(
                out,
                "  {} {}",
                "wrote".dimmed(),
                bundle.path.display()
            );
        }
    }

    let bundle_count = summary.bundles.len();
    let locale_count = summary.locales.enabled().len();
    let msg = format!(
        "Compiled {} {} for {} {} ({} {}) into {}",
        bundle_count,
        pluralize(bundle_count, "bundle", "bundles"),
        summary.package_count,
        pluralize(summary.package_count, "package", "packages"),
        locale_count,
        pluralize(locale_count, "locale", "locales"),
        summary.output_dir
    );
    let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_locales<W: Write, E: Write>(summary: &LocalesSummary, out: &mut W, err: &mut E) {
    let _ = writeln!(
        out,
        "{} {}",
        "default:".bold(),
        summary.locales.default_locale()
    );
    let _ = writeln!(
        out,
        "{} {}",
        "enabled:".bold(),
        summary.locales.enabled().join(", ")
    );

    for package in &summary.empty_packages {
        let _ = writeln!(
            err,
            "{} package '{}' has no phrases",
            "warning:".bold().yellow(),
            package
        );
    }
}

fn print_lookup<W: Write, E: Write>(summary: &LookupSummary, out: &mut W, err: &mut E) {
    if summary.locale_disabled {
        let _ = writeln!(
            err,
            "{} locale '{}' is not enabled, falling back to the default locale",
            "warning:".bold().yellow(),
            summary.locale
        );
    }

    match &summary.value {
        Some(value) => {
            let _ = writeln!(out, "{}", value);
        }
        None => {
            let _ = writeln!(
                err,
                "{} {}",
                FAILURE_MARK.red(),
                format!(
                    "No phrase '{}' for locale '{}'",
                    summary.key, summary.locale
                )
                .red()
            );
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
