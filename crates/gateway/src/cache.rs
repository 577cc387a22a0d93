use super::models::{CacheEntry, StatusCache};
use craftpulse_models::StatusResult;
use dashmap::DashMap;
use tokio::time::{Duration, Instant};

impl StatusCache {
    pub fn new(enabled: bool, ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            enabled,
        }
    }

    /// Returns a fresh entry for `address` with its age in whole seconds.
    /// Stale entries are left in place; a later store overwrites them.
    pub(super) fn lookup(&self, address: &str) -> Option<(StatusResult, u64)> {
        if !self.enabled {
            return None;
        }
        let entry = self.entries.get(address)?;
        let age = entry.cached_at.elapsed();
        if age >= self.ttl {
            return None;
        }
        Some((entry.result.clone(), age.as_secs()))
    }

    pub(super) fn store(&self, address: &str, result: &StatusResult) {
        if !self.enabled {
            return;
        }
        self.entries.insert(
            address.to_string(),
            CacheEntry {
                result: result.clone(),
                cached_at: Instant::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_result() -> StatusResult {
        StatusResult {
            online: false,
            hostname: None,
            version: None,
            icon: None,
            players: None,
            motd: None,
            fetched_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn entry_is_fresh_until_ttl() {
        let cache = StatusCache::new(true, Duration::from_secs(120));
        cache.store("mc.example.org", &offline_result());

        tokio::time::advance(Duration::from_secs(119)).await;
        let (_, age) = cache.lookup("mc.example.org").expect("entry still fresh");
        assert_eq!(age, 119);
    }

    #[tokio::test(start_paused = true)]
    async fn entry_expires_after_ttl() {
        let cache = StatusCache::new(true, Duration::from_secs(120));
        cache.store("mc.example.org", &offline_result());

        tokio::time::advance(Duration::from_secs(120)).await;
        assert!(cache.lookup("mc.example.org").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn store_refreshes_the_slot() {
        let cache = StatusCache::new(true, Duration::from_secs(120));
        cache.store("mc.example.org", &offline_result());

        tokio::time::advance(Duration::from_secs(200)).await;
        cache.store("mc.example.org", &offline_result());

        let (_, age) = cache.lookup("mc.example.org").expect("refreshed entry");
        assert_eq!(age, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_cache_never_hits() {
        let cache = StatusCache::new(false, Duration::from_secs(120));
        cache.store("mc.example.org", &offline_result());
        assert!(cache.lookup("mc.example.org").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn keys_are_independent() {
        let cache = StatusCache::new(true, Duration::from_secs(120));
        cache.store("a.example.org", &offline_result());
        assert!(cache.lookup("b.example.org").is_none());
    }
}
