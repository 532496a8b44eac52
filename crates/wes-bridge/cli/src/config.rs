//! Configuration for wes-bridge

use serde::{Deserialize, Serialize};
use wes_bridge_types::events::{EVENT_BUS_NAME, EVENT_SOURCE};

/// Main CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Workflow registry used by `translate`
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Publication settings for emitted events
    #[serde(default)]
    pub events: EventsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which workflow registry backend to query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    /// Workflow manager REST API
    #[default]
    Http,
    /// JSON fixture file loaded into memory
    Fixture,
}

/// Workflow registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub kind: RegistryKind,

    /// Workflow manager base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Fixture file for `kind = "fixture"`
    #[serde(default)]
    pub fixture_path: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            kind: RegistryKind::Http,
            base_url: None,
            auth_token: None,
            timeout_secs: default_timeout(),
            fixture_path: None,
        }
    }
}

/// Event publication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    #[serde(default = "default_event_bus_name")]
    pub event_bus_name: String,

    #[serde(default = "default_source")]
    pub source: String,

    /// Wrap emitted details in an event bus envelope
    #[serde(default)]
    pub envelope: bool,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            event_bus_name: default_event_bus_name(),
            source: default_source(),
            envelope: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_timeout() -> u64 {
    30
}

fn default_event_bus_name() -> String {
    EVENT_BUS_NAME.to_string()
}

fn default_source() -> String {
    EVENT_SOURCE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl BridgeConfig {
    /// Load configuration: defaults, then the file at `path`, then
    /// `WES_BRIDGE_*` environment variables (`__` separates sections)
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&BridgeConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("WES_BRIDGE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Same configuration with the registry token masked, for display
    pub fn redacted(&self) -> Self {
        let mut shown = self.clone();
        if shown.registry.auth_token.is_some() {
            shown.registry.auth_token = Some("********".to_string());
        }
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.registry.kind, RegistryKind::Http);
        assert_eq!(config.registry.timeout_secs, 30);
        assert_eq!(config.events.event_bus_name, "OrcaBusMain");
        assert_eq!(config.events.source, "orcabus.dragenwgtsrna");
        assert!(!config.events.envelope);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[registry]
kind = "fixture"
fixture_path = "registry.json"
timeout_secs = 5

[events]
envelope = true
"#
        )
        .unwrap();

        let config = BridgeConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.registry.kind, RegistryKind::Fixture);
        assert_eq!(config.registry.fixture_path.as_deref(), Some("registry.json"));
        assert_eq!(config.registry.timeout_secs, 5);
        assert!(config.events.envelope);
        assert_eq!(config.events.event_bus_name, "OrcaBusMain");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(BridgeConfig::load(Some("/nonexistent/wes-bridge.toml")).is_err());
    }

    #[test]
    fn test_redacted_masks_token() {
        let mut config = BridgeConfig::default();
        config.registry.auth_token = Some("secret".into());
        assert_eq!(config.redacted().registry.auth_token.as_deref(), Some("********"));
        assert!(BridgeConfig::default().redacted().registry.auth_token.is_none());
    }
}
