//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::paths::{DEFAULT_INPUT, DEFAULT_OUTPUT};

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  lab-action-gen                          Read AgentLabDefsPS2.json, write AgentLab/ActionDefinitionsPs2.lab
  lab-action-gen -i defs.json -o out.lab  Use explicit input and output paths
  lab-action-gen -o -                     Print definitions to stdout
  lab-action-gen completions bash         Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate lab action definitions from a command size table",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Definitions document with CommandSizes and CommandMap
    #[arg(short = 'i', long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Definition file to create or overwrite ('-' for stdout)
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
