use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::errors::ConfigError;
use super::migration::migrate_config_if_needed;
use super::models::Config;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ConfigError>;

impl Config {
    /// Loads configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_events(path, None).await
    }

    /// Loads configuration from a file with optional event bus for notifications
    pub async fn from_file_with_events<P: AsRef<Path>>(
        path: P,
        events: Option<&Arc<craftpulse_events::EventBus>>,
    ) -> Result<Self> {
        let path = path.as_ref();

        // Create default config if it doesn't exist
        if !path.exists() {
            create_default_config(path).await?;
        }

        // Migrate config if needed
        migrate_config_if_needed(path, events).await?;

        // Read and parse config
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Creates a default configuration file
async fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::models::Config;

    #[tokio::test]
    async fn missing_file_creates_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::from_file(&path).await.unwrap();

        assert!(path.exists());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.status.address, "play.example.com");
    }

    #[tokio::test]
    async fn defaults_fill_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(
            &path,
            "[server]\nhost = \"127.0.0.1\"\nport = 9090\n\n[status]\naddress = \"mc.example.org\"\n",
        )
        .await
        .unwrap();

        let config = Config::from_file(&path).await.unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.cache.ttl_secs, 120);
        assert_eq!(config.poller.interval_secs, 30);
        assert_eq!(config.upstream.api_version, 3);
    }

    #[tokio::test]
    async fn migration_adds_missing_cache_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(
            &path,
            "[server]\nhost = \"0.0.0.0\"\nport = 8080\n\n[cache]\nenabled = false\n\n[status]\naddress = \"mc.example.org\"\n",
        )
        .await
        .unwrap();

        let config = Config::from_file(&path).await.unwrap();
        assert!(!config.cache.enabled);

        // The migrated file now carries the ttl field explicitly
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(written.contains("ttl_secs"));
    }
}
