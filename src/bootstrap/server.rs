use anyhow::Result;
use craftpulse_config::Config;
use craftpulse_events::{AppEvent, EventBus};
use craftpulse_gateway::StatusGateway;
use craftpulse_poller::StatusPoller;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Starts the background poller for the tracked server, unless disabled.
pub fn start_poller(
    config: &Config,
    gateway: Arc<StatusGateway>,
    events: &Arc<EventBus>,
) -> Option<(Arc<StatusPoller>, JoinHandle<()>)> {
    if !config.poller.enabled {
        events.emit(AppEvent::PollerDisabled);
        return None;
    }

    let poller = StatusPoller::new(
        gateway,
        config.status.address.clone(),
        &config.poller,
        Arc::clone(events),
    );
    let handle = poller.clone().start();

    events.emit(AppEvent::PollerStarted {
        address: config.status.address.clone(),
        interval: config.poller.interval_secs,
    });

    Some((poller, handle))
}

pub async fn bind(addr: &str) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            let port = addr.split(':').last().unwrap_or("unknown");
            tracing::error!("❌ Port {} is already in use", port);
            tracing::error!("Another application is using this port");
            tracing::error!("Solutions:");
            tracing::error!("1. Stop the other application");
            tracing::error!("2. Change the port in config.toml");
            #[cfg(target_os = "windows")]
            tracing::error!("3. Find process: netstat -ano | findstr :{}", port);
            #[cfg(not(target_os = "windows"))]
            tracing::error!("3. Find process: lsof -i :{}", port);
        } else {
            tracing::error!("❌ Failed to bind server on {}: {}", addr, e);
        }
        anyhow::anyhow!("Failed to bind server: {}", e)
    })
}
