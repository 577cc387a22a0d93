use craftpulse_models::{CacheInfo, StatusResult};
use craftpulse_poller::StatusSnapshot;
use serde::{Deserialize, Serialize};

/// Body served by `GET /status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub status: StatusResult,
    pub cache: CacheInfo,
}

/// Body served by `GET /status/live`: the poller snapshot plus the MOTD
/// rendered one HTML string per line.
#[derive(Debug, Clone, Serialize)]
pub struct LiveStatusResponse {
    pub address: String,
    #[serde(flatten)]
    pub snapshot: StatusSnapshot,
    pub motd_html: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub refreshing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    /// Set on upstream timeouts so clients can render the offline state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
