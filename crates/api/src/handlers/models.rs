use craftpulse_gateway::StatusGateway;
use craftpulse_poller::StatusPoller;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) gateway: Arc<StatusGateway>,
    pub(super) poller: Option<Arc<StatusPoller>>,
}
