//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for xgit operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum XgitError {
    /// Input Error - malformed URL or invalid argument, detected before any mutation
    #[error("Input error: {message}")]
    Input { message: String },

    /// Repository Error - precondition on the local repository not met
    #[error("Repository error: {message}")]
    Repository { message: String },

    /// Source Error - requested path not found in the repository
    #[error("Source error: {message}")]
    Source { message: String },

    /// Git Error - Git command failed
    #[error("Git error: {message}")]
    Git { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl XgitError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Input { .. } => 1,
            Self::Repository { .. } => 2,
            Self::Source { .. } => 3,
            Self::Git { .. } => 4,
            Self::Filesystem { .. } => 5,
        }
    }

    /// Create an input error
    #[inline]
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Create a repository precondition error
    #[inline]
    pub fn repository<S: Into<String>>(message: S) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }

    /// Create a source error
    #[inline]
    pub fn source<S: Into<String>>(message: S) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Create a git error
    #[inline]
    pub fn git<S: Into<String>>(message: S) -> Self {
        Self::Git {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}
