//! Fetching a URL's payload.
//!
//! [`Fetch`] is the seam between the batch loop and the network; the batch
//! only needs "bytes or failure". [`CurlFetcher`] is the libcurl-backed
//! implementation used by the CLI.

mod curl_fetcher;

pub use curl_fetcher::CurlFetcher;

use anyhow::Result;

/// Blocking "GET url, give me the body" capability.
///
/// Implementations treat non-2xx responses as errors and do not retry.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<Vec<u8>>,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self(url)
    }
}
