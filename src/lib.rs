//! `xgit` - Git content download and submodule removal
//!
//! This library provides two independent git-repository utilities: fetching a
//! file or a subtree from a remote repository at a given ref without keeping
//! git history (using sparse checkout where only part of the tree is needed),
//! and fully deregistering a submodule from a superproject.
//!
//! Both operations shell out to the local `git` installation through the
//! [`system::System`] abstraction, which also covers the filesystem
//! primitives and makes the sequencing testable with [`system::MockSystem`].

pub mod cli;
pub mod error;
pub mod git;
pub mod operations;
pub mod system;
pub mod utils;

use anyhow::Result;
use cli::{Cli, Command, SubmoduleCommand};
use operations::download::DownloadOperation;
use operations::submodule::SubmoduleRemover;
use system::System;

/// Main entry point for the xgit library
pub fn run(cli: Cli, system: &dyn System) -> Result<()> {
    match cli.command {
        Command::Download {
            repository,
            branch,
            path,
        } => DownloadOperation::new(system, &repository, branch, path)?.execute(),
        Command::Submodule {
            command: SubmoduleCommand::Remove { path },
        } => {
            let remover = SubmoduleRemover::new(system)?;
            match path {
                Some(path) => remover.remove(&path),
                None => remover.list(),
            }
        }
    }
}
