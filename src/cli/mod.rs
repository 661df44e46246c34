//! CLI argument definitions for simone-sync.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Simone Atlassian integration tool.
///
/// Previews the tracker and doc-space requests a Simone workspace would
/// send, without performing any network I/O.
#[derive(Parser, Debug)]
#[command(name = "sas")]
#[command(author, version, about = "Preview Simone milestone sync payloads for Atlassian", long_about = None)]
pub struct Cli {
    /// Output records as pretty-printed JSON instead of status lines
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Run as if sas was started in <path> instead of the current directory.
    /// The path must exist and is used literally (no .simone auto-detection).
    /// Can also be set via the SIMONE_ROOT environment variable.
    #[arg(short = 'C', long = "root", global = true, env = "SIMONE_ROOT")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the configured tracker and doc-space connections
    Test,

    /// Preview the tracker project creation request
    CreateProject,

    /// Preview the doc-space creation request
    CreateSpace,

    /// Preview the epic and page payloads for a milestone
    Sync {
        /// Directory containing the milestone meta document
        /// (default: .simone/02_REQUIREMENTS/M07_Atlassian_Integration)
        path: Option<PathBuf>,
    },

    /// Unrecognized commands fall through to the usage banner
    #[command(external_subcommand)]
    External(Vec<OsString>),
}
