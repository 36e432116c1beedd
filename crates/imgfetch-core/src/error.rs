//! Error kinds for a batch run.
//!
//! [`RunError`] ends the batch; [`LineError`] only skips the offending line.

use std::io;
use std::path::PathBuf;

/// Terminal failure of a batch run. The `Display` text is what the report shows.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// No flat-file path was supplied.
    #[error("No flatfile given!")]
    Config,
    /// The flat file does not exist.
    #[error("file '{}' not found!", path.display())]
    NotFound { path: PathBuf },
    /// The flat file exists but could not be opened (permissions, directory, ...).
    #[error("cannot open flatfile '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading a line from the flat file failed mid-run.
    #[error("error while reading flatfile '{}' at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
    /// A fault escaped line processing (caught panic).
    #[error("internal error while processing flatfile: {0}")]
    Internal(String),
}

/// Failure of a single line. Logged and counted, never fatal.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// Every legal suffix for this base name is already taken.
    #[error("Maximum number ({limit}) for file '{file_name}' exceeded!")]
    ResolutionExhausted { file_name: String, limit: u32 },
    /// Checking whether a candidate name exists failed.
    #[error("cannot check '{name}', image file skipped: {source}")]
    Probe {
        name: String,
        #[source]
        source: io::Error,
    },
    /// Fetching the URL failed (transport error, timeout, non-2xx).
    #[error("fetching '{url}' failed: {source:#}")]
    Fetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },
    /// Writing the payload to disk failed.
    #[error("writing '{name}' failed: {source}")]
    Write {
        name: String,
        #[source]
        source: io::Error,
    },
}
