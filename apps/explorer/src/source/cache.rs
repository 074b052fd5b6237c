//! File-backed job cache, refreshed from an HTTP JSON feed.
//!
//! The cache is a JSON array of job objects. A refresh downloads the feed,
//! validates that it decodes, and atomically replaces the cache file, so a
//! failed refresh never leaves a half-written cache behind.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::errors::JobsError;
use crate::models::job::Job;
use crate::source::JobSource;

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// A failed fetch attempt, tagged by whether trying again can help.
enum Attempt {
    Retryable(JobsError),
    Fatal(JobsError),
}

#[derive(Clone)]
pub struct CachedJobSource {
    client: Client,
    cache_path: PathBuf,
    feed_url: Option<String>,
    retry_delay: Duration,
}

impl CachedJobSource {
    pub fn new(cache_path: impl Into<PathBuf>, feed_url: Option<String>) -> Result<Self, JobsError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            cache_path: cache_path.into(),
            feed_url,
            retry_delay: DEFAULT_RETRY_DELAY,
        })
    }

    /// Overrides the base backoff delay (doubled on each retry).
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Downloads and decodes the feed. Retries on connect errors, 429 and 5xx
    /// with exponential backoff; the last failure is returned once
    /// `MAX_RETRIES` attempts are used up.
    async fn fetch_feed(&self, url: &str) -> Result<Vec<Job>, JobsError> {
        let mut attempt = 1;
        loop {
            let error = match self.fetch_once(url).await {
                Ok(jobs) => return Ok(jobs),
                Err(Attempt::Fatal(e)) => return Err(e),
                Err(Attempt::Retryable(e)) => e,
            };

            if attempt >= MAX_RETRIES {
                return Err(error);
            }

            // Exponential backoff: base, 2x base, 4x base...
            let delay = self.retry_delay * (1 << (attempt - 1));
            warn!(
                "Feed fetch attempt {} failed ({}), retrying after {}ms...",
                attempt,
                error,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<Vec<Job>, Attempt> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Attempt::Retryable(JobsError::Http(e)))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = JobsError::FeedStatus {
                status: status.as_u16(),
                message: body,
            };
            return Err(if status.as_u16() == 429 || status.is_server_error() {
                Attempt::Retryable(error)
            } else {
                Attempt::Fatal(error)
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Attempt::Fatal(JobsError::Http(e)))?;
        let jobs: Vec<Job> =
            serde_json::from_slice(&body).map_err(|e| Attempt::Fatal(JobsError::Json(e)))?;
        debug!("Fetched {} jobs ({} bytes) from feed", jobs.len(), body.len());
        Ok(jobs)
    }

    async fn write_cache(&self, jobs: &[Job]) -> Result<(), JobsError> {
        let payload = serde_json::to_vec_pretty(jobs)?;
        let path = self.cache_path.clone();

        tokio::task::spawn_blocking(move || -> Result<(), JobsError> {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            std::fs::create_dir_all(&dir)?;

            let mut staged = tempfile::NamedTempFile::new_in(&dir)?;
            staged.write_all(&payload)?;
            staged.flush()?;
            staged.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await?
    }
}

#[async_trait]
impl JobSource for CachedJobSource {
    async fn refresh(&self) -> Result<(), JobsError> {
        let url = self.feed_url.as_deref().ok_or(JobsError::MissingFeedUrl)?;
        info!("Refreshing job cache from {url}");

        let jobs = self.fetch_feed(url).await?;
        self.write_cache(&jobs).await?;

        info!(
            "Job cache refreshed: {} jobs written to {}",
            jobs.len(),
            self.cache_path.display()
        );
        Ok(())
    }

    async fn load_jobs(&self) -> Result<Vec<Job>, JobsError> {
        debug!("Loading jobs from {}", self.cache_path.display());

        let raw = tokio::fs::read(&self.cache_path).await?;
        let jobs: Vec<Job> = serde_json::from_slice(&raw)?;

        info!("Loaded {} jobs from cache", jobs.len());
        Ok(jobs.into_iter().map(Job::with_default_caption).collect())
    }
}
