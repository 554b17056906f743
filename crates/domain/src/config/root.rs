use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::simulator::SimulatorConfig;
use crate::dns_response::HEADER_LEN;
use crate::icmp_error::{EMBEDDED_HEADER_LEN, EMBEDDED_PAYLOAD_LEN};
use crate::ResponseMode;

const LOCAL_CONFIG_PATH: &str = "dnsfault.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsfault/config.toml";

/// Main configuration structure for the simulator
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listen address and socket sizing
    #[serde(default)]
    pub server: ServerConfig,

    /// Which failure to inject
    #[serde(default)]
    pub simulator: SimulatorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsfault.toml in current directory
    /// 3. /etc/dnsfault/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(mode) = overrides.mode {
            self.simulator.mode = mode;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(icmp_type) = overrides.icmp_type {
            self.simulator.icmp_type = icmp_type;
        }
        if let Some(icmp_code) = overrides.icmp_code {
            self.simulator.icmp_code = icmp_code;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration. An unknown mode token is not an error here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Bind address cannot be empty".to_string(),
            ));
        }

        if self.server.recv_buffer_size < HEADER_LEN {
            return Err(ConfigError::Validation(format!(
                "Receive buffer of {} bytes cannot hold a DNS header",
                self.server.recv_buffer_size
            )));
        }

        let quoted_len = EMBEDDED_HEADER_LEN + EMBEDDED_PAYLOAD_LEN;
        if self.simulator.parsed_mode() == Some(ResponseMode::NetworkUnreachable)
            && self.server.recv_buffer_size < quoted_len
        {
            return Err(ConfigError::Validation(format!(
                "Receive buffer of {} bytes cannot capture the {} bytes quoted by ICMP errors",
                self.server.recv_buffer_size, quoted_len
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub mode: Option<String>,
    pub bind_address: Option<String>,
    pub dns_port: Option<u16>,
    pub icmp_type: Option<u8>,
    pub icmp_code: Option<u8>,
    pub log_level: Option<String>,
}
