//! Main entry point for the docpath CLI.
//!
//! This is the command-line interface for provider-aware paths. It provides
//! commands for working with them:
//! - `normalize`: Print the normalized form of a path
//! - `combine`, `combine-file`, `rebase`: Combine paths
//! - `inspect`: Show the parts of a path
//! - `relative`, `relationship`: Compare paths

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = docpath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        format: cli.format,
    };

    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Combine(cmd) => cmd.execute(&global),
        cli::Command::CombineFile(cmd) => cmd.execute(&global),
        cli::Command::Rebase(cmd) => cmd.execute(&global),
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Relationship(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
