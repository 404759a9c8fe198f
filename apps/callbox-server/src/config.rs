//! Layered configuration for the callbox server.
//!
//! Precedence, lowest to highest: built-in defaults, YAML file (if given),
//! `CALLBOX__*` environment variables, CLI overrides.

use std::net::SocketAddr;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub greeter: GreeterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP endpoint both gRPC services listen on.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 50051)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset and no -v given.
    pub level: String,

    /// Emit JSON-formatted log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Pacing knobs for the greeting service demonstrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GreeterConfig {
    /// Delay between consecutive GreetManyTimes messages, in milliseconds.
    pub pace_ms: u64,

    /// Duration of one GreetWithDeadline work increment, in milliseconds.
    pub work_increment_ms: u64,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            pace_ms: 1000,
            work_increment_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Load layered configuration: defaults → YAML file → environment.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment
            .merge(Env::prefixed("CALLBOX__").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Apply CLI overrides on top of the layered configuration.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>) {
        if let Some(port) = port {
            self.server.bind_addr.set_port(port);
        }
    }

    /// Render the effective configuration for `--print-config` / `check`.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr.port(), 50051);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.greeter.pace_ms, 1000);
        assert_eq!(config.greeter.work_increment_ms, 1000);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            "server:\n  bind_addr: \"0.0.0.0:6000\"\ngreeter:\n  pace_ms: 5"
        )
        .unwrap();

        let config = AppConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.server.bind_addr.port(), 6000);
        assert_eq!(config.greeter.pace_ms, 5);
        // untouched sections keep their defaults
        assert_eq!(config.greeter.work_increment_ms, 1000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn cli_port_override_wins() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(Some(7001));
        assert_eq!(config.server.bind_addr.port(), 7001);
    }

    #[test]
    fn to_json_round_trips() {
        let config = AppConfig::default();
        let rendered = config.to_json().unwrap();
        let parsed: AppConfig = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.server.bind_addr, config.server.bind_addr);
    }
}
