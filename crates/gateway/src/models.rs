use craftpulse_events::EventBus;
use craftpulse_models::{CacheInfo, StatusResult};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::time::{Duration, Instant};

/// Proxies the upstream status aggregator behind a per-host TTL cache and
/// a stable error taxonomy.
pub struct StatusGateway {
    pub(super) client: reqwest::Client,
    pub(super) base_url: String,
    pub(super) api_version: u8,
    pub(super) request_timeout: Duration,
    pub(super) cache: StatusCache,
    pub(super) events: Arc<EventBus>,
}

/// Single-slot-per-host cache. Entries are only ever overwritten, never
/// evicted; expected cardinality is one tracked server.
pub struct StatusCache {
    pub(super) entries: DashMap<String, CacheEntry>,
    pub(super) ttl: Duration,
    pub(super) enabled: bool,
}

pub(super) struct CacheEntry {
    pub(super) result: StatusResult,
    pub(super) cached_at: Instant,
}

/// A status plus how it was served.
#[derive(Debug, Clone)]
pub struct StatusReply {
    pub result: StatusResult,
    pub cache: CacheInfo,
}
