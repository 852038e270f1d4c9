//! Application run modes: logger init, generation, completions.

use std::io;

use clap::CommandFactory;

use crate::cli::{self, Args};
use crate::core;
use crate::core::error::GenerateError;
use crate::core::generator::{Generator, Summary};

/// Initialize env_logger on stderr. `RUST_LOG` overrides the -v/-q level.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Run the generator with the paths given on the command line.
pub fn run_generate(args: &Args) -> Result<Summary, GenerateError> {
    log::info!("{} {}", core::app::NAME, core::app::VERSION);
    let generator = Generator::new(&args.input, &args.output);
    generator.run().inspect_err(|e| {
        log::debug!("Generation failed ({} error)", e.kind());
    })
}

/// Print a completion script for `shell` to stdout.
pub fn run_completions(shell: clap_complete::Shell) {
    let mut cmd = Args::command();
    cli::generate(shell, &mut cmd, core::app::NAME, &mut io::stdout());
}
