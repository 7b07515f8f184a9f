//! Command-line argument definitions for the Swimset CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the group to
//! render, configuration file selection, and logging verbosity.

use clap::Parser;

use swimset::group::GroupLabel;

/// Command-line arguments for the Swimset practice tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input practice file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output text file; printed to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Render only this group (A, B, C, ...)
    #[arg(short, long)]
    pub group: Option<GroupLabel>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
