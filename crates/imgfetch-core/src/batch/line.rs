//! One URL line: resolve a name, fetch, write.

use crate::config::RunConfig;
use crate::error::LineError;
use crate::fetch::Fetch;
use crate::naming::{self, NameLedger, ResolvedName};
use crate::storage::OutputDir;

use super::RunOutcome;

/// Whether the batch should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSignal {
    Continue,
    /// Stop the batch after this line. Line failures currently never ask for this.
    Abort,
}

/// Processes single lines against a fixed config, output directory and fetcher.
pub struct LineProcessor<'a, F: Fetch> {
    config: &'a RunConfig,
    dir: &'a OutputDir,
    fetcher: &'a F,
}

impl<'a, F: Fetch> LineProcessor<'a, F> {
    pub fn new(config: &'a RunConfig, dir: &'a OutputDir, fetcher: &'a F) -> Self {
        Self {
            config,
            dir,
            fetcher,
        }
    }

    /// Copies `url` to disk. Failures are logged and counted in `outcome`;
    /// the batch always continues.
    pub fn process_line(
        &self,
        url: &str,
        ledger: &mut NameLedger,
        outcome: &mut RunOutcome,
    ) -> LineSignal {
        match self.copy(url, ledger) {
            Ok(Some(resolved)) => {
                outcome.copied += 1;
                tracing::info!("copy of '{}' OK!", resolved.name);
                LineSignal::Continue
            }
            Ok(None) => LineSignal::Continue,
            Err(e) => {
                tracing::warn!(url, "{}", e);
                outcome.record_line_error(&e);
                policy_for(&e)
            }
        }
    }

    fn copy(&self, url: &str, ledger: &mut NameLedger) -> Result<Option<ResolvedName>, LineError> {
        let url = url.trim();
        let resolved = match naming::resolve(url, self.config, ledger, self.dir)? {
            Some(r) => r,
            None => return Ok(None),
        };

        let bytes = self.fetcher.fetch(url).map_err(|source| LineError::Fetch {
            url: url.to_string(),
            source,
        })?;

        self.dir
            .write_file(&resolved.name, &bytes)
            .map_err(|source| LineError::Write {
                name: resolved.name.clone(),
                source,
            })?;
        Ok(Some(resolved))
    }
}

/// Batch-level reaction to a line failure.
fn policy_for(e: &LineError) -> LineSignal {
    match e {
        LineError::ResolutionExhausted { .. }
        | LineError::Probe { .. }
        | LineError::Fetch { .. }
        | LineError::Write { .. } => LineSignal::Continue,
    }
}
