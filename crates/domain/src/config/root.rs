use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::LookupConfig;
use super::resolve::ResolveConfig;

const DEFAULT_CONFIG_FILE: &str = "dnslink.toml";
const MIN_UDP_SIZE: u16 = 512;

/// Main configuration structure for the DNSLink resolver
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// TXT lookup backend
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Resolution behaviour
    #[serde(default)]
    pub resolve: ResolveConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnslink.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.servers.is_empty() {
            self.lookup.servers = overrides.servers;
        }
        if let Some(udp_size) = overrides.udp_size {
            self.lookup.udp_size = udp_size;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.lookup.timeout_ms = timeout_ms;
        }
        if overrides.recursive {
            self.resolve.recursive = true;
        }
        if overrides.decode_identifiers {
            self.resolve.decode_identifiers = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookup.udp_size < MIN_UDP_SIZE {
            return Err(ConfigError::Validation(format!(
                "UDP size {} is below the DNS minimum of {}",
                self.lookup.udp_size, MIN_UDP_SIZE
            )));
        }

        self.lookup.check_servers().map_err(|server| {
            ConfigError::Validation(format!("Invalid DNS server address: {}", server))
        })?;

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub servers: Vec<String>,
    pub udp_size: Option<u16>,
    pub timeout_ms: Option<u64>,
    pub recursive: bool,
    pub decode_identifiers: bool,
    pub log_level: Option<String>,
}
