use thiserror::Error;

/// Failures at the per-security fetch boundary.
///
/// Every variant is recoverable: scanners treat `Err` as "no data for this
/// security" and move on, so a single bad fetch never aborts a scan.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    #[error("gateway returned HTTP {0}")]
    Status(u16),

    #[error("malformed quote payload: {0}")]
    Decode(String),

    #[error("no quote returned for security id {0}")]
    Missing(u32),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
