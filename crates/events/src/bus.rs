use super::models::{AppEvent, EventBus};
use colored::Colorize;
use std::sync::Arc;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        match event {
            // Application lifecycle
            AppEvent::Starting => {
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "CraftPulse - Server Status Gateway".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }
            AppEvent::Ready { addr } => {
                println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
                println!("  {} {}", "Server".white(), addr.cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
            }
            AppEvent::Shutdown => {
                println!("\n{}", "Server shutting down".red());
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                println!("  {} {}", "Loading config".dimmed(), path.cyan());
            }
            AppEvent::ConfigLoaded { address } => {
                println!("  {} Tracking {}", "✓".green(), address.cyan());
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    println!("  {} Config updated: added {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    );
                }
            }
            AppEvent::ConfigError { error } => {
                tracing::error!("Configuration error: {}", error);
            }

            // Background poller
            AppEvent::PollerStarted { address, interval } => {
                println!("  {} Polling {} every {}s", "↻".blue(), address.cyan(), interval.to_string().cyan());
            }
            AppEvent::PollerDisabled => {
                println!("  {} Background poller disabled", "⚠".yellow());
            }
            AppEvent::PollerGaveUp { address, attempts } => {
                tracing::warn!("Poller gave up on {} after {} attempts", address, attempts);
            }

            // Status fetches
            AppEvent::StatusOnline { address, players_online, players_max } => {
                tracing::debug!("{} online, {}/{} players", address, players_online, players_max);
            }
            AppEvent::StatusOffline { address } => {
                tracing::info!("{} reported offline by upstream", address);
            }
            AppEvent::StatusError { address, error } => {
                tracing::warn!("Status fetch failed for {}: {}", address, error);
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }
}
