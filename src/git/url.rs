//! Repository URL parsing and scratch workspace naming

use crate::error::XgitError;
use crate::system::System;
use anyhow::Result;
use std::path::PathBuf;

/// A validated remote repository URL
///
/// Validation happens before any I/O so that a typo'd URL never touches the
/// filesystem or spawns git.
#[derive(Debug, Clone)]
pub struct RepoUrl {
    url: String,
    path_component: String,
}

impl RepoUrl {
    /// Parse and validate a repository URL
    ///
    /// Accepted forms: `https://`, `http://`, `ssh://`, `file://` URLs and
    /// scp-like `git@host:path` addresses.
    ///
    /// # Errors
    ///
    /// Returns an input error describing the supported formats when the URL
    /// does not parse.
    pub fn parse(url: &str) -> Result<Self> {
        let path_component = extract_path_component(url)?;

        Ok(Self {
            url: url.to_owned(),
            path_component,
        })
    }

    /// The URL as provided by the caller
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The path component of the URL, without a leading slash
    ///
    /// For `https://example.com/org/repo` this is `org/repo`; for
    /// `git@host:org/repo.git` it is `org/repo.git`.
    #[must_use]
    pub fn path_component(&self) -> &str {
        &self.path_component
    }

    /// Deterministic scratch workspace location for this repository,
    /// rooted under the OS temporary directory.
    ///
    /// Two invocations against the same URL share the workspace; the
    /// caller removes and recreates it before use, so stale state from an
    /// aborted run never leaks into the next one.
    #[must_use]
    pub fn workspace_path(&self, system: &dyn System) -> PathBuf {
        self.path_component
            .split('/')
            .fold(system.temp_dir().join("xgit"), |acc, segment| {
                acc.join(segment)
            })
    }
}

/// Extract the repo-identifying path component from a supported URL form
fn extract_path_component(url: &str) -> Result<String> {
    for scheme in ["https://", "http://", "ssh://", "file://"] {
        if let Some(rest) = url.strip_prefix(scheme) {
            return split_host_path(url, rest, scheme == "file://");
        }
    }

    // scp-like syntax: git@host:org/repo.git
    if url.starts_with("git@")
        && let Some((host, path)) = url.split_once(':')
        && host.contains('.')
        && !path.is_empty()
    {
        return validate_path_component(url, path.trim_matches('/'));
    }

    Err(XgitError::input(format!(
        "Unsupported repository URL format: '{url}'\n\
        Supported formats:\n\
        - HTTPS: https://github.com/myorg/repo.git\n\
        - SSH: ssh://git@github.com/myorg/repo.git or git@github.com:myorg/repo.git\n\
        - Local: file:///path/to/repo"
    ))
    .into())
}

/// Split `host/path` after the scheme, validating both parts are present.
///
/// `file://` URLs have no host; their whole remainder is the path.
fn split_host_path(url: &str, rest: &str, is_file: bool) -> Result<String> {
    let path = if is_file {
        rest
    } else {
        match rest.split_once('/') {
            Some((host, path)) if !host.is_empty() => path,
            _ => "",
        }
    };

    validate_path_component(url, path.trim_matches('/'))
}

/// Validate the path component that names the scratch workspace.
///
/// `.`, `..` and empty segments are rejected outright: the component is
/// joined under the temp directory and a traversal segment would let the
/// workspace (and its remove-then-create prologue) escape that root.
fn validate_path_component(url: &str, path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(XgitError::input(format!(
            "Repository URL has no path component: '{url}'"
        ))
        .into());
    }

    if path
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(XgitError::input(format!(
            "Repository URL has an invalid path component: '{url}'"
        ))
        .into());
    }

    Ok(path.to_owned())
}
