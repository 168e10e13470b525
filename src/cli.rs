use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const USAGE_TEXT: &str = r#"whichpm: detect which package manager (npm or yarn) governs a project

Usage:
  whichpm detect [path] [--json]
  whichpm exe [path]
  whichpm lockfile [path]

Conventions:
  - [path] defaults to the current directory.
  - A yarn.lock plus a yarn executable on PATH selects yarn.
  - A package-lock.json selects npm (no executable check on that branch).
  - With no lock files, yarn on PATH wins; npm is the universal fallback.
  - A directory without package.json prints "(none)": exit 0 for detect, exit 2 for exe/lockfile.
"#;

#[derive(Parser, Debug)]
#[command(name = "whichpm")]
#[command(disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print usage
    Help,

    /// Detect the package manager for a project directory
    Detect {
        /// Project root (defaults to the current directory)
        path: Option<PathBuf>,
        /// Print the full descriptor as JSON (`null` when nothing is detected)
        #[arg(long)]
        json: bool,
    },

    /// Print the executable name of the detected package manager
    Exe { path: Option<PathBuf> },

    /// Print the lock file name of the detected package manager
    Lockfile { path: Option<PathBuf> },
}
