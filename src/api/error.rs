use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("URL cannot be used as an API base: {0}")]
    InvalidBase(String),

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request task failed: {0}")]
    Runtime(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// The server answered, but not with a usable success.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::NotFound(_) | ApiError::Status(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
