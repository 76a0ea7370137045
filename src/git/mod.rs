//! Git operations module
//!
//! Runs the external `git` executable through the [`System`] abstraction and
//! handles repository URL parsing.

pub mod url;

pub use url::*;

use crate::error::XgitError;
use crate::system::{CommandOutput, System};
use anyhow::{Context as _, Result};
use std::path::Path;

/// Run a git command in an explicit working directory, capturing its output.
///
/// A non-zero exit status is not an error here; callers inspect the returned
/// [`CommandOutput`] and decide whether the failure is fatal or tolerable.
pub fn run_git(system: &dyn System, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
    system
        .run_command("git", args, Some(cwd))
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))
}

/// Run a git command and treat a non-zero exit status as fatal.
///
/// The error message names the failing step and carries git's captured stderr.
pub fn run_git_checked(
    system: &dyn System,
    args: &[&str],
    cwd: &Path,
    what: &str,
) -> Result<CommandOutput> {
    let output = run_git(system, args, cwd)?;

    if !output.success() {
        return Err(XgitError::git(format!("Failed to {what}: {}", output.stderr.trim())).into());
    }

    Ok(output)
}

/// Check if Git is available and meets minimum version requirements
///
/// # Errors
///
/// Returns an error if:
/// - The Git command is not found
/// - The Git command failed to execute properly
/// - The Git version is too old
pub fn check_git_availability(system: &dyn System, cwd: &Path) -> Result<()> {
    let output = system
        .run_command("git", &["--version"], Some(cwd))
        .context("Git command not found. Please ensure Git is installed and available in PATH")?;

    if !output.success() {
        return Err(XgitError::git("Git command failed to execute properly").into());
    }

    // Extract version number and check if it meets requirements.
    // Sparse checkout requires Git 2.25+.
    if let Some(version_part) = output.stdout.split_whitespace().nth(2)
        && let Ok(version) = parse_git_version(version_part)
        && version < (2, 25, 0)
    {
        return Err(XgitError::git(format!(
            "Git version {version_part} is too old. xgit requires Git 2.25.0 or later for sparse checkout support"
        ))
        .into());
    }

    Ok(())
}

/// Parse Git version string into tuple (major, minor, patch)
///
/// # Errors
///
/// Returns an error if the version string is invalid
pub fn parse_git_version(version: &str) -> Result<(u32, u32, u32)> {
    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() >= 3 {
        let major = parts[0].parse().context("Invalid major version")?;
        let minor = parts[1].parse().context("Invalid minor version")?;
        let patch = parts[2].parse().context("Invalid patch version")?;
        Ok((major, minor, patch))
    } else {
        Err(anyhow::anyhow!("Invalid version format"))
    }
}
