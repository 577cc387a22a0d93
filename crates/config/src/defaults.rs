/// Default values for configuration fields

use super::models::{CacheSettings, PollerSettings, UpstreamSettings};

pub fn tcp_nodelay() -> bool {
    true
}

pub fn timeout_secs() -> u64 {
    30
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn max_concurrent_requests() -> usize {
    1000
}

pub fn enable_compression() -> bool {
    true
}

pub fn upstream_base_url() -> String {
    "https://api.mcsrvstat.us".to_string()
}

pub fn upstream_api_version() -> u8 {
    3
}

pub fn upstream_timeout_secs() -> u64 {
    8
}

pub fn cache_enabled() -> bool {
    true
}

pub fn cache_ttl_secs() -> u64 {
    120
}

pub fn poller_enabled() -> bool {
    true
}

pub fn poll_interval_secs() -> u64 {
    30
}

pub fn retry_max_attempts() -> u32 {
    5
}

pub fn retry_base_delay_secs() -> u64 {
    5
}

pub fn retry_max_delay_secs() -> u64 {
    30
}

pub fn debounce_secs() -> u64 {
    10
}

pub fn upstream() -> UpstreamSettings {
    UpstreamSettings {
        base_url: upstream_base_url(),
        api_version: upstream_api_version(),
        request_timeout_secs: upstream_timeout_secs(),
    }
}

pub fn cache() -> CacheSettings {
    CacheSettings {
        enabled: cache_enabled(),
        ttl_secs: cache_ttl_secs(),
    }
}

pub fn poller() -> PollerSettings {
    PollerSettings {
        enabled: poller_enabled(),
        interval_secs: poll_interval_secs(),
        retry_max_attempts: retry_max_attempts(),
        retry_base_delay_secs: retry_base_delay_secs(),
        retry_max_delay_secs: retry_max_delay_secs(),
        debounce_secs: debounce_secs(),
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"[server]
host = "0.0.0.0"
port = 8080
tcp_nodelay = true
timeout_secs = 30
allowed_origins = ["*"]
max_concurrent_requests = 1000
enable_compression = true

[upstream]
base_url = "https://api.mcsrvstat.us"
api_version = 3
request_timeout_secs = 8

[cache]
enabled = true
ttl_secs = 120

[poller]
enabled = true
interval_secs = 30
retry_max_attempts = 5
retry_base_delay_secs = 5
retry_max_delay_secs = 30
debounce_secs = 10

[status]
address = "play.example.com"
"#;
