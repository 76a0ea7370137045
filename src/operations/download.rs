//! Download operation: fetch a file, a subtree or a whole repository at a ref
//!
//! Stages a clone or sparse checkout in a scratch workspace derived from the
//! repository URL, strips the git metadata, then relocates the requested
//! content into the target directory.

use crate::error::XgitError;
use crate::git::{RepoUrl, check_git_availability, run_git_checked};
use crate::operations::copy::{copy_dir_contents, copy_file_into};
use crate::system::System;
use crate::utils::fs::{ensure_dir_exists, remove_dir_safe};
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Coordinates a single download operation
pub struct DownloadOperation<'s> {
    system: &'s dyn System,
    url: RepoUrl,
    reference: String,
    source_path: Option<String>,
    target_dir: PathBuf,
}

impl<'s> DownloadOperation<'s> {
    /// Create a new download operation targeting the caller's current
    /// working directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository URL does not parse (no I/O has happened yet)
    /// - The current working directory cannot be determined
    pub fn new(
        system: &'s dyn System,
        url: &str,
        reference: String,
        source_path: Option<String>,
    ) -> Result<Self> {
        let url = RepoUrl::parse(url)?;
        let target_dir = system
            .current_dir()
            .context("Cannot determine current working directory")?;

        Ok(Self {
            system,
            url,
            reference,
            source_path,
            target_dir,
        })
    }

    /// Override the target directory (used by tests and embedding callers)
    #[must_use]
    pub fn with_target_dir(mut self, target_dir: PathBuf) -> Self {
        self.target_dir = target_dir;
        self
    }

    /// Execute the download
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Git is unavailable or too old
    /// - The clone, pull or checkout fails (git's stderr is surfaced)
    /// - The requested path does not exist at the checked out ref
    /// - A filesystem step fails
    pub fn execute(&self) -> Result<()> {
        check_git_availability(self.system, &self.target_dir)?;

        let workspace = self.prepare_workspace()?;

        if let Some(path) = &self.source_path {
            info!(
                "Fetching '{}' at '{}' via sparse checkout",
                path, self.reference
            );
            self.sparse_fetch(&workspace, path)?;
        } else {
            info!("Cloning repository at '{}'", self.reference);
            run_git_checked(
                self.system,
                &["clone", self.url.as_str(), "."],
                &workspace,
                &format!("clone repository '{}'", self.url.as_str()),
            )?;
        }

        // The sparse path pulls into whatever branch `git init` created, so an
        // explicit checkout is needed to land on the requested ref.
        run_git_checked(
            self.system,
            &["checkout", &self.reference],
            &workspace,
            &format!("checkout reference '{}'", self.reference),
        )?;

        // The output must carry no trace of git history.
        remove_dir_safe(self.system, &workspace.join(".git"))?;

        let source = match &self.source_path {
            Some(path) => workspace.join(path),
            None => workspace.clone(),
        };

        if !self.system.exists(&source) {
            return Err(XgitError::source(format!(
                "Path '{}' does not exist in repository '{}' at '{}'",
                self.source_path.as_deref().unwrap_or("."),
                self.url.as_str(),
                self.reference
            ))
            .into());
        }

        if self.system.is_file(&source) {
            let dest = copy_file_into(&source, &self.target_dir)?;
            info!("Downloaded {}", dest.display());
        } else {
            let copied = copy_dir_contents(&source, &self.target_dir)?;
            info!("Downloaded {copied} files into {}", self.target_dir.display());
        }

        // The workspace is scratch state; a failure to clean it up is not
        // worth failing the whole operation over.
        if let Err(err) = remove_dir_safe(self.system, &workspace) {
            warn!("Could not clean up scratch workspace: {err:#}");
        }

        Ok(())
    }

    /// Remove-then-create the scratch workspace so repeated invocations never
    /// compound stale state
    fn prepare_workspace(&self) -> Result<PathBuf> {
        let workspace = self.url.workspace_path(self.system);
        debug!("Scratch workspace: {}", workspace.display());

        // A stale regular file at the workspace path would otherwise survive
        // the dir-only removal and make git init fail against a file.
        if self.system.is_file(&workspace) {
            self.system.remove_file(&workspace).map_err(|e| {
                XgitError::filesystem(format!(
                    "Failed to remove stale workspace entry '{}': {e}",
                    workspace.display()
                ))
            })?;
        }
        remove_dir_safe(self.system, &workspace)?;
        ensure_dir_exists(self.system, &workspace)?;

        Ok(workspace)
    }

    /// Fetch only `path` from the remote using a sparse checkout filter
    fn sparse_fetch(&self, workspace: &Path, path: &str) -> Result<()> {
        run_git_checked(self.system, &["init"], workspace, "initialize repository")?;
        run_git_checked(
            self.system,
            &["remote", "add", "origin", self.url.as_str()],
            workspace,
            "add remote 'origin'",
        )?;
        run_git_checked(
            self.system,
            &["config", "core.sparseCheckout", "true"],
            workspace,
            "enable sparse checkout",
        )?;

        let filter_file = workspace.join(".git/info/sparse-checkout");
        self.system
            .write(&filter_file, format!("{path}\n").as_bytes())
            .with_context(|| {
                format!("Failed to write sparse checkout filter: {}", filter_file.display())
            })?;

        run_git_checked(
            self.system,
            &["pull", "origin", &self.reference],
            workspace,
            &format!(
                "pull '{}' from repository '{}'",
                self.reference,
                self.url.as_str()
            ),
        )?;

        Ok(())
    }
}
