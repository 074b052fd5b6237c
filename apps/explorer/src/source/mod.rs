//! Job sources: where the job list comes from.
//!
//! `main` only talks to a `&dyn JobSource`; the cached feed is the one
//! backend today.

use async_trait::async_trait;

use crate::errors::JobsError;
use crate::models::job::Job;

pub mod cache;

pub use cache::CachedJobSource;

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Re-fetches the upstream data so the next load sees fresh jobs.
    async fn refresh(&self) -> Result<(), JobsError>;

    /// Returns every job, in source order.
    async fn load_jobs(&self) -> Result<Vec<Job>, JobsError>;
}

/// Optionally refreshes, then loads. Failures are returned as-is, never retried here.
pub async fn refresh_and_load(
    source: &dyn JobSource,
    should_refresh: bool,
) -> Result<Vec<Job>, JobsError> {
    if should_refresh {
        source.refresh().await?;
    }
    source.load_jobs().await
}
