//! Output directory: existence probe and whole-file binary writes.
//!
//! Name uniqueness is decided by probing (`try_exists`), not by an exclusive
//! create, so a file created by another process between probe and write is
//! overwritten.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Directory that receives the fetched files.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The current working directory, without resolving it to an absolute path.
    pub fn current() -> Self {
        Self::new(".")
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// True if anything (file, directory, symlink target) already has this name.
    pub fn exists(&self, name: &str) -> io::Result<bool> {
        self.path_of(name).try_exists()
    }

    /// Creates (or truncates) `name` and writes `bytes` verbatim. The handle is
    /// flushed and closed before returning.
    pub fn write_file(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        let mut f = File::create(self.path_of(name))?;
        f.write_all(bytes)?;
        f.flush()
    }
}
