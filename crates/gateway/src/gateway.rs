use super::errors::GatewayError;
use super::models::{StatusCache, StatusGateway, StatusReply};
use craftpulse_config::{CacheSettings, UpstreamSettings};
use craftpulse_events::{AppEvent, EventBus};
use craftpulse_models::{CacheInfo, Motd, Players, StatusResult, UpstreamStatus};
use std::sync::Arc;
use tokio::time::Duration;

type Result<T> = std::result::Result<T, GatewayError>;

impl StatusGateway {
    pub fn new(
        upstream: &UpstreamSettings,
        cache: &CacheSettings,
        events: Arc<EventBus>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: upstream.base_url.trim_end_matches('/').to_string(),
            api_version: upstream.api_version,
            request_timeout: Duration::from_secs(upstream.request_timeout_secs),
            cache: StatusCache::new(cache.enabled, Duration::from_secs(cache.ttl_secs)),
            events,
        }
    }

    /// Resolves the status of `address`, serving from cache while the
    /// entry is fresh.
    pub async fn status(&self, address: &str) -> Result<StatusReply> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GatewayError::MissingAddress);
        }

        if let Some((result, age)) = self.cache.lookup(address) {
            tracing::debug!("Cache hit for {} (age {}s)", address, age);
            return Ok(StatusReply {
                result,
                cache: CacheInfo {
                    hit: true,
                    age: Some(age),
                },
            });
        }

        let payload = match self.fetch_upstream(address).await {
            Ok(payload) => payload,
            Err(e) => {
                self.events.emit(AppEvent::StatusError {
                    address: address.to_string(),
                    error: e.to_string(),
                });
                return Err(e);
            }
        };

        let result = normalize(payload);
        if result.online {
            let (online, max) = result
                .players
                .as_ref()
                .map(|p| (p.online, p.max))
                .unwrap_or((0, 0));
            self.events.emit(AppEvent::StatusOnline {
                address: address.to_string(),
                players_online: online,
                players_max: max,
            });
        } else {
            self.events.emit(AppEvent::StatusOffline {
                address: address.to_string(),
            });
        }

        self.cache.store(address, &result);
        Ok(StatusReply {
            result,
            cache: CacheInfo {
                hit: false,
                age: None,
            },
        })
    }
}

/// Shapes the untrusted upstream payload into a `StatusResult`. Player
/// counts pass through unchecked; `online <= max` is upstream's claim,
/// not ours.
fn normalize(payload: UpstreamStatus) -> StatusResult {
    let players = payload.players.map(|p| Players {
        online: p.online.unwrap_or(0),
        max: p.max.unwrap_or(0),
        list: p.list,
    });

    let motd = payload.motd.map(|m| {
        let clean = if m.clean.is_empty() && !m.raw.is_empty() {
            m.raw.iter().map(|line| craftpulse_motd::strip_codes(line)).collect()
        } else {
            m.clean
        };
        Motd { raw: m.raw, clean }
    });

    StatusResult {
        online: payload.online.unwrap_or(false),
        hostname: payload.hostname,
        version: payload.version,
        icon: payload.icon,
        players,
        motd,
        fetched_at: chrono::Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftpulse_models::{UpstreamMotd, UpstreamPlayers};

    #[test]
    fn normalize_defaults_missing_online_to_false() {
        let result = normalize(UpstreamStatus::default());
        assert!(!result.online);
        assert!(result.players.is_none());
    }

    #[test]
    fn normalize_derives_clean_motd_lines() {
        let payload = UpstreamStatus {
            online: Some(true),
            motd: Some(UpstreamMotd {
                raw: vec!["§e§lHello §cWorld".to_string()],
                ..Default::default()
            }),
            ..Default::default()
        };

        let motd = normalize(payload).motd.unwrap();
        assert_eq!(motd.raw, vec!["§e§lHello §cWorld"]);
        assert_eq!(motd.clean, vec!["Hello World"]);
    }

    #[test]
    fn normalize_keeps_upstream_clean_lines_when_present() {
        let payload = UpstreamStatus {
            motd: Some(UpstreamMotd {
                raw: vec!["§eHi".to_string()],
                clean: vec!["Hi there".to_string()],
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(normalize(payload).motd.unwrap().clean, vec!["Hi there"]);
    }

    #[test]
    fn normalize_passes_player_counts_through_uncorrected() {
        let payload = UpstreamStatus {
            players: Some(UpstreamPlayers {
                online: Some(30),
                max: Some(20),
                list: Vec::new(),
            }),
            ..Default::default()
        };

        let players = normalize(payload).players.unwrap();
        assert_eq!((players.online, players.max), (30, 20));
    }

    #[test]
    fn http_status_mapping() {
        assert_eq!(GatewayError::MissingAddress.http_status(), 400);
        assert_eq!(GatewayError::UpstreamStatus { status: 405 }.http_status(), 500);
        assert_eq!(GatewayError::UpstreamStatus { status: 503 }.http_status(), 503);
        assert_eq!(GatewayError::Timeout.http_status(), 504);
        assert_eq!(GatewayError::FetchFailed("dns".to_string()).http_status(), 500);
    }
}
