use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerSettings,
    #[serde(default = "super::defaults::upstream")]
    pub upstream: UpstreamSettings,
    #[serde(default = "super::defaults::cache")]
    pub cache: CacheSettings,
    #[serde(default = "super::defaults::poller")]
    pub poller: PollerSettings,
    pub status: StatusSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "super::defaults::tcp_nodelay")]
    pub tcp_nodelay: bool,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "super::defaults::enable_compression")]
    pub enable_compression: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamSettings {
    /// Base URL of the third-party status aggregator.
    #[serde(default = "super::defaults::upstream_base_url")]
    pub base_url: String,
    /// Endpoint version appended as a path segment (/2/, /3/, ...).
    #[serde(default = "super::defaults::upstream_api_version")]
    pub api_version: u8,
    #[serde(default = "super::defaults::upstream_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheSettings {
    #[serde(default = "super::defaults::cache_enabled")]
    pub enabled: bool,
    #[serde(default = "super::defaults::cache_ttl_secs")]
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollerSettings {
    #[serde(default = "super::defaults::poller_enabled")]
    pub enabled: bool,
    #[serde(default = "super::defaults::poll_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "super::defaults::retry_max_attempts")]
    pub retry_max_attempts: u32,
    #[serde(default = "super::defaults::retry_base_delay_secs")]
    pub retry_base_delay_secs: u64,
    #[serde(default = "super::defaults::retry_max_delay_secs")]
    pub retry_max_delay_secs: u64,
    /// Triggers arriving within this window collapse into one request.
    #[serde(default = "super::defaults::debounce_secs")]
    pub debounce_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusSettings {
    /// host[:port] of the tracked Minecraft server.
    pub address: String,
}
