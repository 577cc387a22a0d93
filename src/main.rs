mod bootstrap;

use crate::bootstrap::{config, logging, router, server};
use anyhow::Result;
use craftpulse_api::AppState;
use craftpulse_events::{AppEvent, EventBus};
use craftpulse_gateway::StatusGateway;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    logging::initialize();

    let events = EventBus::new(true);
    events.emit(AppEvent::Starting);

    let config_path =
        std::env::var("CRAFTPULSE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = config::load(&config_path, &events).await?;

    let gateway = Arc::new(StatusGateway::new(
        &config.upstream,
        &config.cache,
        Arc::clone(&events),
    ));

    let poller = server::start_poller(&config, Arc::clone(&gateway), &events);
    let (poller_handle, app_state) = match poller {
        Some((poller, handle)) => (Some(handle), AppState::new(gateway, Some(poller))),
        None => (None, AppState::new(gateway, None)),
    };

    let app = router::build(&config, app_state);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = server::bind(&addr).await?;

    events.emit(AppEvent::Ready {
        addr: addr.to_string(),
    });

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        tracing::info!("Shutdown signal received, initiating graceful shutdown...");
    };

    axum::serve(listener, app.into_make_service())
        .tcp_nodelay(config.server.tcp_nodelay)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    // Graceful shutdown: stop the background poller
    if let Some(handle) = poller_handle {
        handle.abort();
        let _ = handle.await;
    }

    events.emit(AppEvent::Shutdown);
    Ok(())
}
