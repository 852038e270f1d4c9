//! # Lab Action Generator
//!
//! Reads a lab definitions document (`CommandSizes` + `CommandMap`) and writes
//! the 1024-slot action definition file consumed by the agent lab runtime.

mod cli;
mod core;
mod run;

use clap::Parser;

use crate::cli::{Args, Commands};

fn main() {
    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = args.command {
        run::run_completions(shell);
        return;
    }

    if let Err(e) = run::run_generate(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
