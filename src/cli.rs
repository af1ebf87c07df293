use std::path::Path;

use clap::{CommandFactory, Parser, Subcommand};

use crate::{clean, fixtures, preset};

/// Root CLI for yeet-cli
#[derive(Parser)]
#[command(name = "yeet-cli")]
#[command(about = "Developer helpers for the yeet project")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate CMakeUserPresets.json for this machine
    Init,
    /// Run every sexpr/*.yeet fixture through build/main
    Test,
    /// Remove the build directory
    Clean,
}

/// Dispatch after parse. `root` is the discovered project root; the process
/// working directory has already been switched there.
pub fn run(root: &Path) {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            if let Err(e) = preset::init(root) {
                eprintln!("error (init): {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Test) => {
            if let Err(e) = fixtures::run_all(root) {
                eprintln!("error (test): {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Clean) => {
            if let Err(e) = clean::remove_build_dir(root) {
                eprintln!("error (clean): {e}");
                std::process::exit(1);
            }
        }
        None => {
            // Bare `yeet-cli` is a request for help, not an error.
            let _ = Cli::command().print_help();
        }
    }
}
