use std::time::Duration;

use kdw_core::corpus::DatasetFetcher;
use kdw_core::error::AppError;
use tracing::debug;

/// Plain HTTP GET for the public scripture datasets. One attempt, no retries.
#[derive(Debug, Clone)]
pub struct HttpDatasetFetcher {
    timeout: Duration,
}

impl HttpDatasetFetcher {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for HttpDatasetFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetFetcher for HttpDatasetFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, AppError> {
        debug!(%url, "fetching remote dataset");
        match ureq::get(url).timeout(self.timeout).call() {
            Ok(r) => r.into_string().map_err(|e| {
                AppError::new("CORPUS_REMOTE_UNREADABLE", "Failed to read remote dataset body")
                    .with_details(format!("url={url}; err={e}"))
            }),
            Err(ureq::Error::Status(status, _)) => Err(AppError::new(
                "CORPUS_REMOTE_STATUS",
                "Remote dataset request failed",
            )
            .with_details(format!("url={url}; status={status}"))),
            Err(e) => Err(AppError::new(
                "CORPUS_REMOTE_UNREACHABLE",
                "Failed to reach remote dataset",
            )
            .with_details(format!("url={url}; err={e}"))
            .with_retryable(true)),
        }
    }
}
