//! CLI for imgfetch.

mod legacy;

use clap::Parser;
use imgfetch_core::batch::{BatchRunner, RunOutcome};
use imgfetch_core::config::{self, AttemptLimit, ImgfetchConfig, RunConfig};
use imgfetch_core::fetch::CurlFetcher;
use imgfetch_core::report;
use imgfetch_core::storage::OutputDir;
use std::ffi::OsString;
use std::path::PathBuf;

pub use legacy::normalize_legacy_args;

/// Copies the files listed in a flat file (one URL per line) into a local directory.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "Copy files listed in a flat file of URLs to local disk", long_about = None)]
pub struct Cli {
    /// Flat file with one URL per line.
    pub flatfile: Option<PathBuf>,

    /// Write the run protocol to readImgFromURL.log in the current directory.
    #[arg(short = 'p', long = "prot")]
    pub prot: bool,

    /// Maximum number of files with the same name; `--max` alone or `--max=0` removes the limit.
    #[arg(
        long = "max",
        value_name = "LIMIT",
        num_args = 0..=1,
        require_equals = true,
        value_parser = clap::value_parser!(u32)
    )]
    pub max: Option<Option<u32>>,

    /// Directory that receives the files (default: current directory).
    #[arg(short = 'C', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Parses `args` after rewriting legacy `-max[=N]` spellings.
    pub fn parse_normalized<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Cli::parse_from(normalize_legacy_args(args))
    }

    /// Limit requested on the command line, if any.
    pub fn attempt_limit(&self) -> Option<AttemptLimit> {
        match self.max {
            None => None,
            Some(None) => Some(AttemptLimit::Unbounded),
            Some(Some(n)) => Some(AttemptLimit::from_count(n)),
        }
    }

    pub fn run_config(&self, file_cfg: &ImgfetchConfig) -> RunConfig {
        RunConfig::from_file_config(file_cfg, self.attempt_limit(), self.prot)
    }

    /// Runs the batch and prints the summary. See [`exit_code`] for the status.
    pub fn run(&self) -> RunOutcome {
        let file_cfg = config::load_or_init().unwrap_or_else(|err| {
            tracing::warn!("using default config: {:#}", err);
            ImgfetchConfig::default()
        });
        tracing::debug!("loaded config: {:?}", file_cfg);

        let run_cfg = self.run_config(&file_cfg);
        let dir = match &self.output_dir {
            Some(d) => OutputDir::new(d),
            None => OutputDir::current(),
        };
        let fetcher = CurlFetcher::new(run_cfg.http);
        let runner = BatchRunner::new(run_cfg, dir, fetcher);

        let outcome = runner.run(self.flatfile.as_deref());
        report::report(&outcome, &mut std::io::stdout().lock());
        outcome
    }
}

/// Process exit status for a finished run: 0 on success, 1 when the batch failed.
/// Lines that were skipped do not make the run fail.
pub fn exit_code(outcome: &RunOutcome) -> i32 {
    if outcome.is_ok() {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests;
