//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translation strings and write the `.pot` template
//! - `init`: Initialize jsgettext configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::parsers::source::Language;

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

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source root directory; config lookup and relative paths start here
    #[arg(long, default_value = ".")]
    pub source_root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Translation function name (overrides config file)
    /// Can be specified multiple times: -f tr -f i18n.tr
    #[arg(short = 'f', long = "function-name")]
    pub function_names: Vec<String>,

    /// Output template path (overrides config file)
    #[arg(long)]
    pub pot_file: Option<PathBuf>,

    /// Extractor used for the sources given on the command line
    #[arg(long, value_enum, default_value_t = Language::Javascript)]
    pub extractor: Language,

    /// Files, directories or glob patterns; replaces the configured groups
    pub sources: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translation strings into a gettext template
    Extract(ExtractCommand),
    /// Initialize a new .jsgettextrc.json configuration file
    Init,
}
