//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Collect phrase sources and write one bundle per package and locale
//! - `locales`: Show the resolved default and enabled locales
//! - `lookup`: Resolve a phrase key through the runtime translator
//! - `init`: Initialize a phrasepack configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.common.verbose,
            Some(Command::Locales(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all pipeline commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root; the config file is searched from here upwards
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Default locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Enabled locale, repeatable (overrides config file)
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Bundle output directory (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Locale to resolve the phrase for
    pub locale: String,

    /// Full phrase key, e.g. `forum.menu.open`
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile translation bundles for every package and enabled locale
    Build(BuildCommand),
    /// Print the resolved default and enabled locales
    Locales(LocalesCommand),
    /// Look up a phrase the way the running service would
    Lookup(LookupCommand),
    /// Initialize a new .phrasepackrc.json configuration file
    Init,
}
