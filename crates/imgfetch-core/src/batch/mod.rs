//! Batch loop over a flat file of URLs.
//!
//! `run` goes through: check the path, open the file, iterate lines (each one
//! handed to [`LineProcessor`]), close the file, return the finished
//! [`RunOutcome`]. Only a missing path, an unopenable file, a read error
//! between lines or a panic fail the batch; per-line failures are counted and
//! skipped.

mod line;

pub use line::{LineProcessor, LineSignal};

use std::any::Any;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::config::RunConfig;
use crate::error::{LineError, RunError};
use crate::fetch::Fetch;
use crate::naming::NameLedger;
use crate::storage::OutputDir;

/// Terminal status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    #[default]
    Ok,
    Failed,
}

/// Accumulated result of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOutcome {
    /// Files fetched and written.
    pub copied: u64,
    /// Non-blank lines that produced no file.
    pub skipped: u64,
    /// Most recent error message (line-level or terminal).
    pub last_error: Option<String>,
    pub status: RunStatus,
}

impl RunOutcome {
    pub fn is_ok(&self) -> bool {
        self.status == RunStatus::Ok
    }

    pub(crate) fn record_line_error(&mut self, e: &LineError) {
        self.skipped += 1;
        self.last_error = Some(e.to_string());
    }

    fn fail(&mut self, e: &RunError) {
        tracing::error!("{}", e);
        self.status = RunStatus::Failed;
        self.last_error = Some(e.to_string());
    }
}

/// Drives a whole flat file through [`LineProcessor`].
pub struct BatchRunner<F: Fetch> {
    config: RunConfig,
    dir: OutputDir,
    fetcher: F,
}

impl<F: Fetch> BatchRunner<F> {
    pub fn new(config: RunConfig, dir: OutputDir, fetcher: F) -> Self {
        Self {
            config,
            dir,
            fetcher,
        }
    }

    /// Processes every line of `flat_file`. Never returns an error and never
    /// panics: all failures end up in the returned outcome.
    pub fn run(&self, flat_file: Option<&Path>) -> RunOutcome {
        let mut outcome = RunOutcome::default();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.run_checked(flat_file, &mut outcome)
        }));
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => outcome.fail(&e),
            Err(payload) => outcome.fail(&RunError::Internal(panic_message(payload.as_ref()))),
        }
        outcome
    }

    fn run_checked(&self, flat_file: Option<&Path>, outcome: &mut RunOutcome) -> Result<(), RunError> {
        let path = match flat_file {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Err(RunError::Config),
        };
        let reader = open_flat_file(path)?;
        tracing::debug!(path = %path.display(), "flatfile opened");
        // `reader` is dropped (file closed) when this returns, on every path.
        self.run_lines(reader, path, outcome)
    }

    /// Feeds each line of `reader` to the line processor. `path` is only used
    /// in error messages.
    pub fn run_lines<R: BufRead>(
        &self,
        reader: R,
        path: &Path,
        outcome: &mut RunOutcome,
    ) -> Result<(), RunError> {
        let processor = LineProcessor::new(&self.config, &self.dir, &self.fetcher);
        let mut ledger = NameLedger::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| RunError::Read {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })?;
            let url = line.trim();
            if url.is_empty() {
                continue;
            }
            if processor.process_line(url, &mut ledger, outcome) == LineSignal::Abort {
                tracing::warn!(line = idx + 1, "batch aborted by line processor");
                break;
            }
        }
        Ok(())
    }
}

fn open_flat_file(path: &Path) -> Result<BufReader<File>, RunError> {
    match File::open(path) {
        Ok(f) => Ok(BufReader::new(f)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(RunError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(RunError::Open {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
