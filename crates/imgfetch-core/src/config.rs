use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

/// Default maximum number of files sharing one base name.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// How many suffixes the name resolver may try for one base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptLimit {
    /// Only suffixes `0..n` are legal, i.e. at most `n` files per base name.
    Bounded(NonZeroU32),
    /// Keep probing until a free name turns up.
    Unbounded,
}

impl AttemptLimit {
    /// `0` means unbounded, matching the config file convention.
    pub fn from_count(n: u32) -> Self {
        match NonZeroU32::new(n) {
            Some(n) => AttemptLimit::Bounded(n),
            None => AttemptLimit::Unbounded,
        }
    }

    /// True if `suffix` may still be tried under this limit.
    pub fn allows(&self, suffix: u32) -> bool {
        match self {
            AttemptLimit::Bounded(n) => suffix < n.get(),
            AttemptLimit::Unbounded => true,
        }
    }
}

impl Default for AttemptLimit {
    fn default() -> Self {
        AttemptLimit::from_count(DEFAULT_MAX_ATTEMPTS)
    }
}

/// HTTP settings handed to the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub follow_redirects: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(300),
            follow_redirects: true,
        }
    }
}

/// Settings for one batch run. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub max_attempts: AttemptLimit,
    /// Write the run protocol to `readImgFromURL.log`.
    pub log_enabled: bool,
    pub http: HttpSettings,
}

impl RunConfig {
    /// Starts from the file config; `max_attempts` overrides its limit when given.
    pub fn from_file_config(
        file: &ImgfetchConfig,
        max_attempts: Option<AttemptLimit>,
        log_enabled: bool,
    ) -> Self {
        Self {
            max_attempts: max_attempts.unwrap_or_else(|| AttemptLimit::from_count(file.max_attempts)),
            log_enabled,
            http: file.http_settings(),
        }
    }
}

/// Optional configuration loaded from `~/.config/imgfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgfetchConfig {
    /// Maximum number of files with the same base name (0 = no limit).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Total per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_connect_timeout_secs() -> u64 {
    30
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for ImgfetchConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            follow_redirects: default_follow_redirects(),
        }
    }
}

impl ImgfetchConfig {
    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            follow_redirects: self.follow_redirects,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImgfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ImgfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ImgfetchConfig::default();
        assert_eq!(cfg.max_attempts, 100);
        assert_eq!(cfg.connect_timeout_secs, 30);
        assert_eq!(cfg.timeout_secs, 300);
        assert!(cfg.follow_redirects);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: ImgfetchConfig = toml::from_str("max_attempts = 5").unwrap();
        assert_eq!(cfg.max_attempts, 5);
        assert_eq!(cfg.timeout_secs, 300);
        assert!(cfg.follow_redirects);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            max_attempts = 0
            connect_timeout_secs = 5
            timeout_secs = 60
            follow_redirects = false
        "#;
        let cfg: ImgfetchConfig = toml::from_str(toml).unwrap();
        let run = RunConfig::from_file_config(&cfg, None, true);
        assert_eq!(run.max_attempts, AttemptLimit::Unbounded);
        assert!(run.log_enabled);
        assert_eq!(run.http.connect_timeout, Duration::from_secs(5));
        assert_eq!(run.http.timeout, Duration::from_secs(60));
        assert!(!run.http.follow_redirects);
    }

    #[test]
    fn cli_limit_overrides_file() {
        let cfg = ImgfetchConfig::default();
        let run = RunConfig::from_file_config(&cfg, Some(AttemptLimit::Unbounded), false);
        assert_eq!(run.max_attempts, AttemptLimit::Unbounded);
    }

    #[test]
    fn attempt_limit_bounds() {
        let limit = AttemptLimit::from_count(3);
        assert!(limit.allows(0));
        assert!(limit.allows(2));
        assert!(!limit.allows(3));
        assert!(AttemptLimit::Unbounded.allows(u32::MAX));
        assert_eq!(AttemptLimit::default(), AttemptLimit::from_count(100));
    }
}
