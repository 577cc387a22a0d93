use super::models::AppState;
use crate::errors::ApiError;
use crate::models::{LiveStatusResponse, RefreshResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use craftpulse_motd::render_line_html;

/// Serves the background poller's current snapshot for the status widget,
/// with the MOTD pre-rendered line by line.
pub async fn get_live_status(
    State(state): State<AppState>,
) -> Result<Json<LiveStatusResponse>, ApiError> {
    let poller = state.poller.as_ref().ok_or(ApiError::PollerDisabled)?;
    let snapshot = poller.snapshot();

    let motd_html = snapshot
        .motd_lines()
        .iter()
        .map(|line| render_line_html(line))
        .collect();

    Ok(Json(LiveStatusResponse {
        address: poller.address().to_string(),
        snapshot,
        motd_html,
    }))
}

/// Manual retry trigger for the widget's refresh button.
pub async fn refresh_live_status(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<RefreshResponse>), ApiError> {
    let poller = state.poller.as_ref().ok_or(ApiError::PollerDisabled)?;
    tracing::debug!("Manual refresh requested for {}", poller.address());
    poller.request_refresh();

    Ok((StatusCode::ACCEPTED, Json(RefreshResponse { refreshing: true })))
}
