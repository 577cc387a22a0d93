use super::models::AppState;
use axum::extract::FromRef;
use craftpulse_gateway::StatusGateway;
use craftpulse_poller::StatusPoller;
use std::sync::Arc;

impl AppState {
    pub fn new(gateway: Arc<StatusGateway>, poller: Option<Arc<StatusPoller>>) -> Self {
        Self { gateway, poller }
    }
}

impl FromRef<AppState> for Arc<StatusGateway> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.gateway)
    }
}

impl FromRef<AppState> for Option<Arc<StatusPoller>> {
    fn from_ref(state: &AppState) -> Self {
        state.poller.clone()
    }
}
