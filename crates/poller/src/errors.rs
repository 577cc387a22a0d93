use super::models::PollErrorKind;
use craftpulse_gateway::GatewayError;
use thiserror::Error;

/// Failure taxonomy surfaced to the presentation layer. Each variant maps
/// to a distinct user-facing message; the retry affordance is identical.
#[derive(Error, Debug, Clone)]
pub enum PollError {
    #[error("Request timed out. The server may be experiencing high load.")]
    Timeout,

    #[error("Network connectivity issue. Please check your internet connection.")]
    Connectivity,

    #[error("Failed to fetch server status: {0}")]
    Generic(String),
}

impl PollError {
    pub fn kind(&self) -> PollErrorKind {
        match self {
            Self::Timeout => PollErrorKind::Timeout,
            Self::Connectivity => PollErrorKind::Connectivity,
            Self::Generic(_) => PollErrorKind::Generic,
        }
    }
}

impl From<GatewayError> for PollError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Timeout => PollError::Timeout,
            GatewayError::FetchFailed(_) => PollError::Connectivity,
            other => PollError::Generic(other.to_string()),
        }
    }
}
