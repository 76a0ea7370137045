//! Mock system implementation for testing

use super::{CommandOutput, System};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// A recorded external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

struct Script {
    program: String,
    args: Vec<String>,
    output: CommandOutput,
}

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem plus scripted command
/// results, perfect for fast, isolated unit tests without side effects.
/// Every command invocation is recorded so tests can assert on ordering
/// and on the absence of mutating calls.
///
/// # Example
/// ```
/// use xgit::system::{CommandOutput, MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_current_dir("/repo")
///     .with_file("/repo/.gitmodules", b"[submodule \"vendor/lib\"]\n")
///     .on_git(&["rev-parse", "--is-inside-work-tree"], CommandOutput::ok("true\n"));
///
/// assert!(system.exists(Path::new("/repo/.gitmodules")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    current_dir: PathBuf,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    scripts: Vec<Script>,
    invocations: Vec<Invocation>,
}

impl MockSystem {
    /// Create a new `MockSystem` with an empty root filesystem
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                current_dir: PathBuf::from("/"),
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
                scripts: Vec::new(),
                invocations: Vec::new(),
            })),
        }
    }

    /// Set the current working directory (builder pattern)
    #[must_use]
    pub fn with_current_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        {
            let mut state = self.state.write().unwrap();
            let path = dir.as_ref().to_path_buf();
            Self::ensure_dirs(&mut state.dirs, &path);
            state.current_dir = path;
        }
        self
    }

    /// Add a file with contents, creating parent directories (builder pattern)
    #[must_use]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> Self {
        {
            let mut state = self.state.write().unwrap();
            let path = path.as_ref().to_path_buf();
            if let Some(parent) = path.parent() {
                Self::ensure_dirs(&mut state.dirs, parent);
            }
            state.files.insert(path, contents.to_vec());
        }
        self
    }

    /// Add a directory and its ancestors (builder pattern)
    #[must_use]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> Self {
        {
            let mut state = self.state.write().unwrap();
            Self::ensure_dirs(&mut state.dirs, path.as_ref());
        }
        self
    }

    /// Script the result of a `git` invocation with exactly these arguments
    /// (builder pattern). Unscripted invocations fail with an I/O error so
    /// tests notice unexpected commands.
    #[must_use]
    pub fn on_git(self, args: &[&str], output: CommandOutput) -> Self {
        self.on_command("git", args, output)
    }

    /// Script the result of an arbitrary command invocation (builder pattern)
    #[must_use]
    pub fn on_command(self, program: &str, args: &[&str], output: CommandOutput) -> Self {
        {
            let mut state = self.state.write().unwrap();
            state.scripts.push(Script {
                program: program.to_owned(),
                args: args.iter().map(|&a| a.to_owned()).collect(),
                output,
            });
        }
        self
    }

    /// All command invocations recorded so far, in order
    #[must_use]
    pub fn invocations(&self) -> Vec<Invocation> {
        self.state.read().unwrap().invocations.clone()
    }

    /// Check whether any recorded invocation starts with the given arguments
    #[must_use]
    pub fn invoked_with(&self, prefix: &[&str]) -> bool {
        self.invocations().iter().any(|inv| {
            inv.args.len() >= prefix.len()
                && inv.args.iter().zip(prefix).all(|(a, &p)| a.as_str() == p)
        })
    }

    fn ensure_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            dirs.insert(current.clone());
        }
    }
}

impl Default for MockSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    fn run_command(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> io::Result<CommandOutput> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        state.invocations.push(Invocation {
            program: program.to_owned(),
            args: args.iter().map(|&a| a.to_owned()).collect(),
            cwd: cwd.map(Path::to_path_buf),
        });

        state
            .scripts
            .iter()
            .find(|script| script.program == program && script.args == args)
            .map(|script| script.output.clone())
            .ok_or_else(|| {
                io::Error::other(format!(
                    "no scripted response for: {program} {}",
                    args.join(" ")
                ))
            })
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.state.read().unwrap().current_dir.clone())
    }

    fn temp_dir(&self) -> PathBuf {
        PathBuf::from("/tmp")
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self.state.read().unwrap();
        let contents = state
            .files
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))?;
        String::from_utf8(contents.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.state.write().unwrap();
        if let Some(parent) = path.parent() {
            Self::ensure_dirs(&mut state.dirs, parent);
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().unwrap();
        Self::ensure_dirs(&mut state.dirs, path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().unwrap();
        if !state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                path.display().to_string(),
            ));
        }
        state.dirs.retain(|dir| !dir.starts_with(path));
        state.files.retain(|file, _| !file.starts_with(path));
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().unwrap();
        if state.files.remove(path).is_none() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                path.display().to_string(),
            ));
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.read().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.state.read().unwrap().files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.read().unwrap().dirs.contains(path)
    }
}
