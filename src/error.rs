use thiserror::Error;

/// Failure to retrieve a page. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },
    #[error("request failed")]
    Request(#[source] reqwest::Error),
    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Error fetching page")]
    Fetch(#[from] FetchError),
    #[error("Could not extract article content")]
    ContentNotFound,
    #[error("failed to write output to {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize article")]
    Serialize(#[from] serde_json::Error),
}
