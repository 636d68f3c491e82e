/// 上游请求错误

use std::time::Duration;

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream timed out after {0:?}")]
    Timeout(Duration),
    #[error("upstream returned status {0}")]
    Status(StatusCode),
    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("failed to parse upstream response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl UpstreamError {
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Request(err)
        }
    }
}
