use super::retry::RetryPolicy;
use craftpulse_events::EventBus;
use craftpulse_gateway::StatusGateway;
use craftpulse_models::StatusResult;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, watch, Notify};
use tokio::time::Duration;

/// Keeps the tracked server's status fresh in the background and publishes
/// snapshots over a watch channel.
pub struct StatusPoller {
    pub(super) gateway: Arc<StatusGateway>,
    pub(super) address: String,
    pub(super) interval: Duration,
    pub(super) debounce: Duration,
    pub(super) retry: RetryPolicy,
    pub(super) events: Arc<EventBus>,
    pub(super) snapshot_tx: watch::Sender<StatusSnapshot>,
    pub(super) refresh_notify: Notify,
    pub(super) shutdown_tx: broadcast::Sender<()>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PollPhase {
    /// Initial state, no data yet
    Loading,
    Ready,
    /// Background or manual refresh in flight, previous data still shown
    Refreshing,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PollErrorKind {
    Timeout,
    Connectivity,
    Generic,
}

#[derive(Debug, Clone, Serialize)]
pub struct PollFailure {
    pub kind: PollErrorKind,
    pub message: String,
}

/// What the presentation layer renders. `data` holds the last good result
/// through refreshes and failures.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub phase: PollPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StatusResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PollFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl StatusSnapshot {
    pub fn initial() -> Self {
        Self {
            phase: PollPhase::Loading,
            data: None,
            error: None,
            last_updated: None,
        }
    }

    /// Raw MOTD lines to display, falling back to the built-in sample when
    /// no live MOTD is available.
    pub fn motd_lines(&self) -> Vec<String> {
        self.data
            .as_ref()
            .and_then(|data| data.motd.as_ref())
            .filter(|motd| !motd.raw.is_empty())
            .map(|motd| motd.raw.clone())
            .unwrap_or_else(craftpulse_motd::sample_motd)
    }
}
