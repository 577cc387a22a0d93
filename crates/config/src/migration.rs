use super::errors::ConfigError;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

type Result<T> = std::result::Result<T, ConfigError>;

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<craftpulse_events::EventBus>>,
) -> Result<()> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>()?;
    let mut added_fields = Vec::new();

    migrate_server_section(&mut doc, &mut added_fields)?;
    migrate_upstream_section(&mut doc, &mut added_fields)?;
    migrate_cache_section(&mut doc, &mut added_fields)?;
    migrate_poller_section(&mut doc, &mut added_fields)?;

    // Only write if we added fields
    if !added_fields.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;

        if let Some(event_bus) = events {
            event_bus.emit(craftpulse_events::AppEvent::ConfigMigrated {
                added_fields: added_fields.clone(),
            });
        }
    }

    Ok(())
}

fn section<'a>(
    doc: &'a mut DocumentMut,
    name: &str,
    added_fields: &mut Vec<String>,
) -> Result<&'a mut Table> {
    if !doc.contains_key(name) {
        let mut table = Table::new();
        table.set_implicit(true);
        doc[name] = Item::Table(table);
        added_fields.push(name.to_string());
    }
    doc[name]
        .as_table_mut()
        .ok_or_else(|| ConfigError::MigrationError(format!("Invalid [{}] section in config", name)))
}

fn migrate_server_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<()> {
    let server = section(doc, "server", added_fields)?;
    ensure_field(server, "host", Value::from("0.0.0.0"), added_fields);
    ensure_field(server, "port", Value::from(8080), added_fields);
    ensure_field(server, "tcp_nodelay", Value::from(true), added_fields);
    ensure_field(server, "timeout_secs", Value::from(30), added_fields);
    ensure_field(server, "max_concurrent_requests", Value::from(1000), added_fields);
    ensure_field(server, "enable_compression", Value::from(true), added_fields);

    if !server.contains_key("allowed_origins") {
        let mut arr = Array::new();
        arr.push("*");
        server["allowed_origins"] = Item::Value(Value::Array(arr));
        added_fields.push("server.allowed_origins".to_string());
    }

    Ok(())
}

fn migrate_upstream_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<()> {
    let upstream = section(doc, "upstream", added_fields)?;
    ensure_field(
        upstream,
        "base_url",
        Value::from("https://api.mcsrvstat.us"),
        added_fields,
    );
    ensure_field(upstream, "api_version", Value::from(3), added_fields);
    ensure_field(upstream, "request_timeout_secs", Value::from(8), added_fields);
    Ok(())
}

fn migrate_cache_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<()> {
    let cache = section(doc, "cache", added_fields)?;
    ensure_field(cache, "enabled", Value::from(true), added_fields);
    ensure_field(cache, "ttl_secs", Value::from(120), added_fields);
    Ok(())
}

fn migrate_poller_section(
    doc: &mut DocumentMut,
    added_fields: &mut Vec<String>,
) -> Result<()> {
    let poller = section(doc, "poller", added_fields)?;
    ensure_field(poller, "enabled", Value::from(true), added_fields);
    ensure_field(poller, "interval_secs", Value::from(30), added_fields);
    ensure_field(poller, "retry_max_attempts", Value::from(5), added_fields);
    ensure_field(poller, "retry_base_delay_secs", Value::from(5), added_fields);
    ensure_field(poller, "retry_max_delay_secs", Value::from(30), added_fields);
    ensure_field(poller, "debounce_secs", Value::from(10), added_fields);
    Ok(())
}

fn ensure_field(table: &mut Table, key: &str, default: Value, added_fields: &mut Vec<String>) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default);
        added_fields.push(key.to_string());
    }
}
