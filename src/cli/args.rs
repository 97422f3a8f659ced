//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::domain::CycleStrategy;

/// Validate parent/child edge lists as proper binary trees
#[derive(Parser, Debug)]
#[command(name = "treecheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d -d -d)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .treecheck.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check edge-list files (stdin when no file is given)
    Check(CheckArgs),

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Edge-list files, one `child parent` pair per line
    #[arg(value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Print nothing; report through the exit code only
    #[arg(short, long)]
    pub quiet: bool,

    /// Children allowed per node
    #[arg(long, value_name = "N")]
    pub max_children: Option<usize>,

    /// Treat an empty edge list as invalid
    #[arg(long)]
    pub empty_invalid: bool,

    /// Cycle detection walk: path-local or memoized
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<CycleStrategy>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print the global config file path
    Path,
}
