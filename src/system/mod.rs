//! System abstraction for process execution and filesystem operations
//!
//! This module provides a unified trait for all external system interactions,
//! allowing for easy testing with mock implementations.

use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Captured result of running an external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code of the process, if it terminated normally
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Check whether the command exited with status zero
    #[must_use]
    #[inline]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Build a successful output with the given stdout (test helper)
    #[must_use]
    #[inline]
    pub fn ok<S: Into<String>>(stdout: S) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            code: Some(0),
        }
    }

    /// Build a failed output with the given exit code and stderr (test helper)
    #[must_use]
    #[inline]
    pub fn failed<S: Into<String>>(code: i32, stderr: S) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            code: Some(code),
        }
    }
}

/// Unified trait for system operations (process execution + filesystem)
///
/// This trait abstracts all interactions with the operating system:
/// spawning external commands and the filesystem primitives the tool needs.
/// Every command invocation takes an explicit working directory so that no
/// operation depends on hidden process-wide state.
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::process` and `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage and scripted
///   command results
pub trait System: Send + Sync {
    // ==================== Process Operations ====================

    /// Run an external command to completion, capturing stdout, stderr and
    /// the exit code. A non-zero exit is NOT an `Err`; callers inspect the
    /// returned [`CommandOutput`] and decide per step whether failure is
    /// fatal or tolerable.
    fn run_command(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> io::Result<CommandOutput>;

    // ==================== Environment Operations ====================

    /// Get the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Get the OS temporary directory root
    fn temp_dir(&self) -> PathBuf;

    // ==================== Filesystem Operations ====================

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating it if it doesn't exist
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory and all its contents
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> bool;
}
