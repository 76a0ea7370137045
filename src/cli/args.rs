use clap::{Parser, Subcommand};

/// Command-line arguments for xgit
#[derive(Parser, Debug, Clone)]
#[command(name = "xgit")]
#[command(about = "Download files or folders from Git repositories and remove submodules")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Download folders or files from a Git repository
    Download {
        /// Git repository URL (https://, ssh://, git@host:path or file://)
        repository: String,

        /// Branch, tag or commit to fetch
        #[arg(default_value = "main")]
        branch: String,

        /// Repository-relative file or folder; omit to fetch the whole tree
        path: Option<String>,
    },

    /// Manage Git submodules
    Submodule {
        #[command(subcommand)]
        command: SubmoduleCommand,
    },
}

/// Submodule management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SubmoduleCommand {
    /// Remove a Git submodule; with no path, list current submodules
    Remove {
        /// Submodule path to remove
        path: Option<String>,
    },
}
