use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use craftpulse_gateway::GatewayError;
use thiserror::Error;

use crate::models::{ErrorDetail, ErrorResponse};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Server address parameter is required")]
    MissingAddress,

    #[error("Background poller is not running")]
    PollerDisabled,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, online) = match &self {
            ApiError::MissingAddress => (StatusCode::BAD_REQUEST, "MISSING_ADDRESS", None),
            ApiError::PollerDisabled => {
                (StatusCode::SERVICE_UNAVAILABLE, "POLLER_DISABLED", None)
            }
            ApiError::Gateway(err) => {
                let status = StatusCode::from_u16(err.http_status())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let code = match err {
                    GatewayError::MissingAddress => "MISSING_ADDRESS",
                    GatewayError::UpstreamStatus { .. } => "UPSTREAM_ERROR",
                    GatewayError::Timeout => "UPSTREAM_TIMEOUT",
                    GatewayError::FetchFailed(_) => "FETCH_FAILED",
                    GatewayError::InvalidPayload(_) => "INVALID_PAYLOAD",
                };
                // Timeouts carry online:false so clients render the
                // offline state instead of a blank widget
                let online = matches!(err, GatewayError::Timeout).then_some(false);
                (status, code, online)
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
            online,
        };

        let mut response = (status, Json(body)).into_response();
        // Failures must never be cached by intermediaries
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, must-revalidate"),
        );
        response
    }
}
