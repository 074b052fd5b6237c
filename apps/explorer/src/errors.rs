use thiserror::Error;

/// Failures raised by a job source while refreshing or loading the cache.
#[derive(Debug, Error)]
pub enum JobsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Feed returned status {status}: {message}")]
    FeedStatus { status: u16, message: String },

    #[error("No feed URL configured; set JOBS_FEED_URL to refresh the cache")]
    MissingFeedUrl,

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Failures raised by query functions.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("'{input}' does not match the {format} format: {source}")]
    Parse {
        input: String,
        format: String,
        #[source]
        source: DateParseError,
    },

    #[error("Cannot render date with the {format} format")]
    Render { format: String },

    #[error("Insufficient items: requested {requested}, only {available} available")]
    InsufficientItems { requested: usize, available: usize },
}

/// Why a date string did not match its expected format.
#[derive(Debug, Error)]
pub enum DateParseError {
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),

    #[error("year '{0}' must have four digits")]
    YearWidth(String),
}
