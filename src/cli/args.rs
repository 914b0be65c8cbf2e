//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Scan source files and write translation dictionaries
//! - `init`: Initialize langgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::FileType;

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
            Some(Command::Generate(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Locales to generate, comma separated (overrides config file)
    #[arg(short, long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Output encoding (overrides config file)
    #[arg(short = 't', long = "type", value_enum)]
    pub file_type: Option<FileType>,

    /// Dictionary file name for the array encoding (overrides config file)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Scan only this directory instead of the views and app folders
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Remove keys that are no longer used in the code
    #[arg(long)]
    pub sync: bool,

    /// Ignore existing dictionaries and write fresh ones
    #[arg(long, conflicts_with = "append")]
    pub new: bool,

    /// Only add missing keys, never touch existing ones
    #[arg(long)]
    pub append: bool,

    /// Store dotted keys as flat entries instead of nested arrays
    #[arg(long)]
    pub no_short_keys: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan views and app folders for translation keys and write dictionaries
    Generate(GenerateCommand),
    /// Initialize a new .langgenrc.json configuration file
    Init,
}
