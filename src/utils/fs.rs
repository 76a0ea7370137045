//! File system utilities

use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Safely remove a directory and all its contents; missing directories are a no-op
pub fn remove_dir_safe(system: &dyn System, dir_path: &Path) -> Result<()> {
    if system.exists(dir_path) && system.is_dir(dir_path) {
        system
            .remove_dir_all(dir_path)
            .with_context(|| format!("Failed to remove directory: {}", dir_path.display()))?;
    }
    Ok(())
}

/// Ensure a directory exists, creating it and its parents if necessary
pub fn ensure_dir_exists(system: &dyn System, dir_path: &Path) -> Result<()> {
    if !system.exists(dir_path) {
        system
            .create_dir_all(dir_path)
            .with_context(|| format!("Failed to create directory: {}", dir_path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MockSystem;
    use std::path::PathBuf;

    #[test]
    fn remove_dir_safe_tolerates_missing_dir() {
        let system = MockSystem::new();
        remove_dir_safe(&system, &PathBuf::from("/missing")).unwrap();
    }

    #[test]
    fn remove_dir_safe_removes_existing_dir() {
        let system = MockSystem::new().with_file("/work/file.txt", b"data");
        let system_view: &dyn System = &system;

        remove_dir_safe(system_view, &PathBuf::from("/work")).unwrap();
        assert!(!system.exists(&PathBuf::from("/work")));
    }

    #[test]
    fn ensure_dir_exists_creates_nested_dirs() {
        let system = MockSystem::new();
        ensure_dir_exists(&system, &PathBuf::from("/a/b/c")).unwrap();
        assert!(system.is_dir(&PathBuf::from("/a/b/c")));
    }
}
