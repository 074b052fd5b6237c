use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::source::cache::DEFAULT_RETRY_DELAY;

const DEFAULT_CACHE_PATH: &str = "data/jobs.json";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub cache_path: PathBuf,
    pub feed_url: Option<String>,
    pub refresh: bool,
    /// Base backoff between feed fetch retries.
    pub retry_delay: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let refresh = match lookup("JOBS_REFRESH") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .with_context(|| format!("JOBS_REFRESH must be 'true' or 'false', got '{raw}'"))?,
            None => false,
        };

        let retry_delay = match lookup("JOBS_RETRY_DELAY_MS") {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().with_context(|| {
                    format!("JOBS_RETRY_DELAY_MS must be a number of milliseconds, got '{raw}'")
                })?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_RETRY_DELAY,
        };

        Ok(Config {
            cache_path: lookup("JOBS_CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_PATH)),
            feed_url: lookup("JOBS_FEED_URL").filter(|url| !url.trim().is_empty()),
            refresh,
            retry_delay,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.cache_path, PathBuf::from("data/jobs.json"));
        assert!(config.feed_url.is_none());
        assert!(!config.refresh);
        assert_eq!(config.retry_delay, Duration::from_millis(1000));
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("JOBS_CACHE_PATH", "/tmp/cache.json"),
            ("JOBS_FEED_URL", "https://example.com/jobs.json"),
            ("JOBS_REFRESH", "true"),
            ("JOBS_RETRY_DELAY_MS", "250"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.cache_path, PathBuf::from("/tmp/cache.json"));
        assert_eq!(config.feed_url.as_deref(), Some("https://example.com/jobs.json"));
        assert!(config.refresh);
        assert_eq!(config.retry_delay, Duration::from_millis(250));
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_blank_feed_url_is_unset() {
        let config = config_from(&[("JOBS_FEED_URL", "  ")]).unwrap();
        assert!(config.feed_url.is_none());
    }

    #[test]
    fn test_invalid_retry_delay_is_rejected() {
        let err = config_from(&[("JOBS_RETRY_DELAY_MS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("JOBS_RETRY_DELAY_MS"));
    }

    #[test]
    fn test_invalid_refresh_flag_is_rejected() {
        let err = config_from(&[("JOBS_REFRESH", "yes")]).unwrap_err();
        assert!(err.to_string().contains("JOBS_REFRESH"));
    }
}
