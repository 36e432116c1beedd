//! Single GET via a libcurl Easy handle, body collected in memory.

use anyhow::{Context, Result};
use std::str;

use super::Fetch;
use crate::config::HttpSettings;

const MAX_REDIRECTIONS: u32 = 10;

/// Fetcher backed by libcurl. One Easy handle per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlFetcher {
    settings: HttpSettings,
}

impl CurlFetcher {
    pub fn new(settings: HttpSettings) -> Self {
        Self { settings }
    }
}

impl Fetch for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.follow_location(self.settings.follow_redirects)?;
        easy.max_redirections(MAX_REDIRECTIONS)?;
        easy.connect_timeout(self.settings.connect_timeout)?;
        easy.timeout(self.settings.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(line) = str::from_utf8(data) {
                    let line = line.trim_end();
                    if !line.is_empty() {
                        tracing::trace!("header: {}", line);
                    }
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform().context("GET request failed")?;
        }

        let code = easy.response_code().context("no response code")?;
        if !(200..300).contains(&code) {
            anyhow::bail!("GET {} returned HTTP {}", url, code);
        }
        tracing::debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}
