//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// meta-check - Find missing and dangling Unity .meta files
#[derive(Parser, Debug)]
#[command(name = "meta-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "silent")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub silent: bool,

    /// Run configuration file (.toml, .json, .yaml)
    #[arg(long, global = true, value_name = "PATH", env = "META_CHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that scans a tree
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanArgs {
    /// Directory to check (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Target type: auto-detect, unity-project, unity-project-sub-dir or upm-package
    #[arg(long, value_name = "TYPE", env = "META_CHECK_TARGET_TYPE")]
    pub target_type: Option<String>,

    /// Pair assets and companions case-insensitively
    #[arg(long)]
    pub ignore_case: bool,

    /// Do not report dangling .meta files
    #[arg(long)]
    pub ignore_dangling: bool,

    /// Skip submodules and nested projects or packages
    #[arg(long)]
    pub ignore_submodules_and_nested: bool,

    /// Ignore file with one glob per line (defaults to <ROOT>/.meta-check-ignore)
    #[arg(long, value_name = "PATH")]
    pub ignore_file: Option<PathBuf>,
}

/// Report destinations of the check command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputArgs {
    /// Also write a JUnit XML report to this path
    #[arg(long, value_name = "PATH")]
    pub junit: Option<PathBuf>,

    /// Print a Markdown comment body instead of plain text
    #[arg(long)]
    pub markdown: bool,

    /// Language of the built-in Markdown template (en, ja)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Custom Markdown template (JSON)
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Report missing and dangling .meta files
    ///
    /// Exits with status 1 when any are found.
    ///
    /// Examples:
    ///   meta-check check                      # Check the current directory
    ///   meta-check check MyProject --junit out.xml
    ///   meta-check check Packages/com.example.tool --markdown --lang ja
    Check {
        #[command(flatten)]
        scan: ScanArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create missing and remove dangling .meta files
    ///
    /// Only paths matching an --allow glob are touched. Allow globs are
    /// matched relative to the target root, while ignore-file globs are
    /// matched relative to the working directory.
    ///
    /// Examples:
    ///   meta-check fix --allow 'Assets/Generated/**'
    ///   meta-check fix MyProject --allow '**' --dry-run
    Fix {
        #[command(flatten)]
        scan: ScanArgs,

        /// Glob of paths the fixer may touch, relative to the target root (repeatable)
        #[arg(long = "allow", value_name = "GLOB")]
        allow: Vec<String>,

        /// Preview fixes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
