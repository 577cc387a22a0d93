use serde::{Deserialize, Serialize};

/// Raw payload returned by the upstream status API.
///
/// Every field is optional: the upstream aggregator changes shape between
/// endpoint versions and omits whole sections for offline servers, so
/// nothing here may be trusted to exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamStatus {
    pub online: Option<bool>,
    pub ip: Option<String>,
    pub port: Option<u16>,
    pub hostname: Option<String>,
    pub version: Option<String>,
    pub protocol: Option<i64>,
    pub software: Option<String>,
    pub icon: Option<String>,
    pub players: Option<UpstreamPlayers>,
    pub motd: Option<UpstreamMotd>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamPlayers {
    pub online: Option<u32>,
    pub max: Option<u32>,
    #[serde(default)]
    pub list: Vec<Player>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamMotd {
    #[serde(default)]
    pub raw: Vec<String>,
    #[serde(default)]
    pub clean: Vec<String>,
    #[serde(default)]
    pub html: Vec<String>,
}

/// A single entry in the player sample. Older upstream endpoint versions
/// send the UUID under `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    #[serde(alias = "id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Normalized server status as served by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResult {
    pub online: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Players>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motd: Option<Motd>,
    /// RFC 3339 timestamp of the upstream fetch that produced this result.
    pub fetched_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Players {
    pub online: u32,
    pub max: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<Player>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motd {
    /// One entry per display line, formatting codes included.
    pub raw: Vec<String>,
    /// Same lines with formatting codes stripped.
    pub clean: Vec<String>,
}

/// Cache annotation attached to every gateway response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheInfo {
    pub hit: bool,
    /// Age of the cached entry in seconds. Absent on fresh fetches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_payload_tolerates_missing_fields() {
        let status: UpstreamStatus = serde_json::from_str("{}").unwrap();
        assert!(status.online.is_none());
        assert!(status.players.is_none());
        assert!(status.motd.is_none());
    }

    #[test]
    fn player_uuid_accepts_legacy_id_key() {
        let player: Player =
            serde_json::from_str(r#"{"name": "Steve", "id": "abc-123"}"#).unwrap();
        assert_eq!(player.uuid.as_deref(), Some("abc-123"));
    }

    #[test]
    fn unknown_upstream_fields_are_ignored() {
        let status: UpstreamStatus = serde_json::from_str(
            r#"{"online": true, "debug": {"ping": true}, "map": "world"}"#,
        )
        .unwrap();
        assert_eq!(status.online, Some(true));
    }
}
