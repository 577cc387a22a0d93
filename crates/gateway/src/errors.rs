use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("server address is required")]
    MissingAddress,

    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("upstream request timed out")]
    Timeout,

    #[error("fetch failed: {0}")]
    FetchFailed(String),

    #[error("invalid status payload: {0}")]
    InvalidPayload(String),
}

impl GatewayError {
    /// HTTP status surfaced to clients. Upstream 405 from this aggregator
    /// means transient API drift, not a terminal client error, so it is
    /// remapped to 500; every other upstream status passes through.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MissingAddress => 400,
            Self::UpstreamStatus { status: 405 } => 500,
            Self::UpstreamStatus { status } => *status,
            Self::Timeout => 504,
            Self::FetchFailed(_) | Self::InvalidPayload(_) => 500,
        }
    }

    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::MissingAddress)
    }
}

// Convert reqwest errors to GatewayError
impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else if err.is_decode() {
            GatewayError::InvalidPayload(err.to_string())
        } else {
            GatewayError::FetchFailed(err.to_string())
        }
    }
}
