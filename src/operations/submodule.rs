//! Submodule removal and listing
//!
//! Submodules are frequently left half-registered (hand-edited configs,
//! partially removed entries), so removal is a sequence of independently
//! fallible steps. Two hard gates run first: the working tree check and the
//! registration check, so a typo'd path never triggers destructive action.
//! After the gates, config edits are best-effort and the index removal is
//! mandatory, because an indexed-but-unconfigured submodule is the most
//! common corrupt state this command exists to fix.

use crate::error::XgitError;
use crate::git::{run_git, run_git_checked};
use crate::system::System;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Result of one best-effort removal step
///
/// Fatal steps return `Err` instead; `Skipped` records why a tolerant step
/// did not apply, which keeps the tolerance policy auditable per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step applied its change
    Applied,
    /// The step had nothing to do or failed tolerably
    Skipped(String),
}

/// Removes submodule registrations from a superproject, or lists them
pub struct SubmoduleRemover<'s> {
    system: &'s dyn System,
    work_dir: PathBuf,
}

impl<'s> SubmoduleRemover<'s> {
    /// Create a remover operating on the repository containing the current
    /// working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current working directory cannot be determined
    pub fn new(system: &'s dyn System) -> Result<Self> {
        let work_dir = system.current_dir()?;
        Ok(Self { system, work_dir })
    }

    /// List mode: print submodule status plus usage guidance; never mutates
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory is not inside a git
    /// working tree
    pub fn list(&self) -> Result<()> {
        self.ensure_work_tree()?;

        let output = run_git_checked(
            self.system,
            &["submodule", "status"],
            &self.work_dir,
            "query submodule status",
        )?;

        if output.stdout.trim().is_empty() {
            println!("No submodules registered.");
        } else {
            print!("{}", output.stdout);
        }
        println!("Usage: xgit submodule remove <path>");

        Ok(())
    }

    /// Removal mode: fully deregister the submodule at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory is not inside a git working tree
    /// - `path` is not a registered submodule
    /// - The index removal fails
    /// - A filesystem removal fails
    pub fn remove(&self, path: &str) -> Result<()> {
        self.ensure_work_tree()?;
        self.ensure_registered(path)?;

        // Best-effort config edits: inconsistency here is the expected state
        // of the repositories this command repairs.
        for (step, outcome) in [
            (
                ".gitmodules section removal",
                self.remove_gitmodules_section(path)?,
            ),
            (
                "local config section removal",
                self.remove_config_section(path)?,
            ),
        ] {
            match outcome {
                StepOutcome::Applied => debug!("{step}: done"),
                StepOutcome::Skipped(reason) => warn!("{step} skipped: {reason}"),
            }
        }

        // Mandatory: the index entry is the facet git itself refuses to
        // clean up once the config sections are gone.
        run_git_checked(
            self.system,
            &["rm", "--cached", path],
            &self.work_dir,
            &format!("remove '{path}' from the index"),
        )?;

        self.remove_work_tree_dir(path)?;
        self.remove_module_metadata(path)?;
        self.stage_gitmodules()?;

        info!("Successfully removed submodule: {path}");
        info!("Note: you still need to commit these changes, e.g.:");
        info!("    git commit -m \"Remove submodule {path}\"");

        Ok(())
    }

    /// Gate: the current directory must be inside a git working tree
    fn ensure_work_tree(&self) -> Result<()> {
        let output = run_git(
            self.system,
            &["rev-parse", "--is-inside-work-tree"],
            &self.work_dir,
        )?;

        if !output.success() || output.stdout.trim() != "true" {
            return Err(XgitError::repository(format!(
                "Not a git repository: {}",
                self.work_dir.display()
            ))
            .into());
        }

        Ok(())
    }

    /// Gate: `path` must be a registered submodule
    fn ensure_registered(&self, path: &str) -> Result<()> {
        let output = run_git(
            self.system,
            &["submodule", "status", "--", path],
            &self.work_dir,
        )?;

        if !output.success() || output.stdout.trim().is_empty() {
            return Err(XgitError::repository(format!(
                "'{path}' is not a registered submodule"
            ))
            .into());
        }

        Ok(())
    }

    /// Remove the `submodule.<path>` section from `.gitmodules`, tolerating
    /// a missing file or section
    fn remove_gitmodules_section(&self, path: &str) -> Result<StepOutcome> {
        if !self.system.exists(&self.work_dir.join(".gitmodules")) {
            return Ok(StepOutcome::Skipped("no .gitmodules file".to_owned()));
        }

        let section = format!("submodule.{path}");
        let output = run_git(
            self.system,
            &["config", "-f", ".gitmodules", "--remove-section", &section],
            &self.work_dir,
        )?;

        if output.success() {
            Ok(StepOutcome::Applied)
        } else {
            Ok(StepOutcome::Skipped(format!(
                "could not remove section '{section}': {}",
                output.stderr.trim()
            )))
        }
    }

    /// Remove the `submodule.<path>` section from the local repository
    /// config, tolerating absence
    fn remove_config_section(&self, path: &str) -> Result<StepOutcome> {
        let section = format!("submodule.{path}");
        let output = run_git(
            self.system,
            &["config", "--remove-section", &section],
            &self.work_dir,
        )?;

        if output.success() {
            Ok(StepOutcome::Applied)
        } else {
            Ok(StepOutcome::Skipped(format!(
                "could not remove section '{section}' from local config: {}",
                output.stderr.trim()
            )))
        }
    }

    /// Delete the submodule's working-tree directory if it still exists
    fn remove_work_tree_dir(&self, path: &str) -> Result<()> {
        let work_tree = self.work_dir.join(path);
        if self.system.is_dir(&work_tree) {
            self.system.remove_dir_all(&work_tree).map_err(|e| {
                XgitError::filesystem(format!(
                    "Failed to remove working tree directory '{}': {e}",
                    work_tree.display()
                ))
            })?;
        }
        Ok(())
    }

    /// Delete the submodule's object store under `.git/modules/<path>`,
    /// which git leaves behind after deinit
    fn remove_module_metadata(&self, path: &str) -> Result<()> {
        let metadata = self.work_dir.join(".git/modules").join(path);
        if self.system.is_dir(&metadata) {
            self.system.remove_dir_all(&metadata).map_err(|e| {
                XgitError::filesystem(format!(
                    "Failed to remove submodule metadata '{}': {e}",
                    metadata.display()
                ))
            })?;
        }
        Ok(())
    }

    /// Stage `.gitmodules` if it still exists (step 3 may have emptied or
    /// removed it)
    fn stage_gitmodules(&self) -> Result<()> {
        if self.system.exists(&self.work_dir.join(".gitmodules")) {
            run_git_checked(
                self.system,
                &["add", ".gitmodules"],
                &self.work_dir,
                "stage .gitmodules",
            )?;
        }
        Ok(())
    }
}
