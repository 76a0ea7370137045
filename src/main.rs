//! # `xgit`
//!
//! `xgit` is a command-line tool for pulling files or folders out of remote
//! Git repositories without keeping history, and for removing Git submodules
//! cleanly (config, index, working tree and leftover metadata).
//!
//! ## Usage
//!
//! **Download a file or folder:**
//! ```sh
//! xgit download https://github.com/user/repo main docs/guide.md
//! ```
//!
//! **Remove a submodule:**
//! ```sh
//! xgit submodule remove vendor/lib
//! ```
//!
//! See `xgit --help` for more options and details.

use anyhow::Result;
use clap::Parser as _;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};
use xgit::cli::Cli;
use xgit::error::XgitError;
use xgit::system::RealSystem;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let system = RealSystem::new();
    match xgit::run(cli, &system) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(
                err.downcast_ref::<XgitError>()
                    .map_or(1, XgitError::exit_code),
            );
        }
    }
}
