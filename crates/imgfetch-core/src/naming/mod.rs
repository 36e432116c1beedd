//! Collision-free local file names for fetched URLs.
//!
//! The first URL with a given trailing segment keeps that name verbatim; later
//! ones (or ones whose name is already on disk) get a numeric suffix between
//! base name and extension: `photo.jpg`, `photo.1.jpg`, `photo.2.jpg`, ...

mod ledger;
mod split;

pub use ledger::NameLedger;
pub use split::UrlFileName;

use crate::config::{AttemptLimit, RunConfig};
use crate::error::LineError;
use crate::storage::OutputDir;

/// A file name that did not exist in the output directory when it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    /// 0 for the bare name, otherwise the inserted suffix.
    pub suffix: u32,
}

/// Picks a free local name for `url`.
///
/// - `Ok(None)`: blank or malformed line, skip silently.
/// - `Err(ResolutionExhausted)`: every suffix allowed by `config.max_attempts` is taken.
/// - `Err(Probe)`: the existence check itself failed.
///
/// On success the ledger resumes the next search for this base name one past
/// the returned suffix. The name is not reserved: the caller must create the
/// file before resolving the same base name again.
pub fn resolve(
    url: &str,
    config: &RunConfig,
    ledger: &mut NameLedger,
    dir: &OutputDir,
) -> Result<Option<ResolvedName>, LineError> {
    let parts = match UrlFileName::parse(url) {
        Some(p) => p,
        None => return Ok(None),
    };

    let mut suffix = ledger.start_for(&parts.base_name);
    loop {
        if !config.max_attempts.allows(suffix) {
            return Err(exhausted(&parts, config.max_attempts));
        }
        let candidate = parts.candidate(suffix);
        let taken = dir.exists(&candidate).map_err(|source| LineError::Probe {
            name: candidate.clone(),
            source,
        })?;
        if !taken {
            ledger.record_issued(&parts.base_name, suffix);
            return Ok(Some(ResolvedName {
                name: candidate,
                suffix,
            }));
        }
        tracing::debug!(name = %candidate, "name taken, trying next suffix");
        suffix = match suffix.checked_add(1) {
            Some(s) => s,
            None => return Err(exhausted(&parts, config.max_attempts)),
        };
    }
}

fn exhausted(parts: &UrlFileName, limit: AttemptLimit) -> LineError {
    let limit = match limit {
        AttemptLimit::Bounded(n) => n.get(),
        AttemptLimit::Unbounded => u32::MAX,
    };
    LineError::ResolutionExhausted {
        file_name: parts.file_name.clone(),
        limit,
    }
}
