use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { address: String },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },
    ConfigError { error: String },

    // Background poller
    PollerStarted { address: String, interval: u64 },
    PollerDisabled,
    PollerGaveUp { address: String, attempts: u32 },

    // Status fetches
    StatusOnline { address: String, players_online: u32, players_max: u32 },
    StatusOffline { address: String },
    StatusError { address: String, error: String },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    #[allow(dead_code)]
    pub(super) silent_mode: bool,
}
