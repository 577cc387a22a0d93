use anyhow::Result;
use craftpulse_config::Config;
use craftpulse_events::{AppEvent, EventBus};
use std::sync::Arc;

pub async fn load(config_path: &str, events: &Arc<EventBus>) -> Result<Config> {
    events.emit(AppEvent::ConfigLoading {
        path: config_path.to_string(),
    });

    let config_exists = std::path::Path::new(config_path).exists();
    let config = Config::from_file_with_events(config_path, Some(events)).await?;

    if !config_exists {
        events.emit(AppEvent::ConfigCreated {
            path: config_path.to_string(),
        });
    }

    events.emit(AppEvent::ConfigLoaded {
        address: config.status.address.clone(),
    });

    Ok(config)
}
