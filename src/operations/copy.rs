//! File and directory copying operations
//!
//! Relocates fetched content from the scratch workspace into the caller's
//! working directory, overwriting conflicting entries.

use crate::error::XgitError;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy a single file into the target directory under its original base name,
/// overwriting any existing file of that name. Returns the destination path.
pub fn copy_file_into(source: &Path, target_dir: &Path) -> Result<PathBuf> {
    if !source.is_file() {
        return Err(XgitError::source(format!("Source is not a file: {}", source.display())).into());
    }

    let file_name = source.file_name().ok_or_else(|| {
        XgitError::source(format!("Source has no file name: {}", source.display()))
    })?;

    let target_path = target_dir.join(file_name);
    fs::copy(source, &target_path).with_context(|| {
        format!(
            "Failed to copy file from {} to {}",
            source.display(),
            target_path.display()
        )
    })?;

    Ok(target_path)
}

/// Copy a directory's contents (not the directory itself) into the target
/// directory, overwriting conflicting entries. Returns the number of files
/// copied.
pub fn copy_dir_contents(source: &Path, target_dir: &Path) -> Result<usize> {
    if !source.is_dir() {
        return Err(
            XgitError::source(format!("Source is not a directory: {}", source.display())).into(),
        );
    }

    let mut files_copied = 0;

    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.context("Failed to read directory entry")?;
        let source_path = entry.path();

        let relative_path = source_path
            .strip_prefix(source)
            .context("Failed to calculate relative path")?;
        let target_path = target_dir.join(relative_path);

        if source_path.is_dir() {
            if !target_path.exists() {
                fs::create_dir_all(&target_path).with_context(|| {
                    format!("Failed to create directory: {}", target_path.display())
                })?;
            }
        } else if source_path.is_file() {
            if let Some(parent) = target_path.parent()
                && !parent.exists()
            {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create parent directory: {}", parent.display())
                })?;
            }

            fs::copy(source_path, &target_path).with_context(|| {
                format!(
                    "Failed to copy file from {} to {}",
                    source_path.display(),
                    target_path.display()
                )
            })?;

            files_copied += 1;
        }
    }

    Ok(files_copied)
}
