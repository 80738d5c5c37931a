//! Build script for docpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("docpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize and combine provider-aware paths")
        .long_about(
            "Command-line tool for normalizing, combining and comparing provider-aware \
             directory and file paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file in addition to discovered ones")
                .value_name("PATH")
                .global(true)
                .env("DOCPATH_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (text or json)")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Normalize a path")
                .long_about("Print the normalized form of a directory or file path"),
            Command::new("combine")
                .about("Combine a base directory with another directory")
                .long_about(
                    "Append a relative directory to a base, or replace the base with an \
                     absolute one",
                ),
            Command::new("combine-file")
                .about("Combine a base directory with a file, keeping the file's directories"),
            Command::new("rebase")
                .about("Place a file's name under a base directory")
                .long_about("Drop a file's directories and place its name under a base directory"),
            Command::new("inspect")
                .about("Show the parts of a path")
                .long_about("Show the root, segments, name, extension and parent of a path"),
            Command::new("relative")
                .about("Compute the relative path between two paths"),
            Command::new("relationship")
                .about("Show how two directories relate")
                .long_about("Report whether one directory is an ancestor or descendant of another"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a docpath configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("docpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
