use serde::{Deserialize, Serialize};
use std::path::Path;

use super::assets::AssetsConfig;
use super::dns::RawDnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_FILES: &[&str] = &["dnsplan.json", "dnsplan.toml"];
const SYSTEM_CONFIG_FILE: &str = "/etc/dnsplan/config.json";

/// Main configuration structure for dnsplan
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub log: LoggingConfig,

    /// Geosite asset location
    #[serde(default)]
    pub assets: AssetsConfig,

    /// DNS section to compile
    #[serde(default)]
    pub dns: RawDnsConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsplan.json / dnsplan.toml in current directory
    /// 3. /etc/dnsplan/config.json
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file, choosing the format by extension
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        if is_toml(path) {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(assets) = overrides.assets_path {
            self.assets.path = assets;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.log.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.is_empty() {
            return Err(ConfigError::Validation(
                "DNS section defines neither servers nor hosts".to_string(),
            ));
        }

        if !matches!(self.log.format.to_ascii_lowercase().as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "Unknown log format '{}'",
                self.log.format
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        LOCAL_CONFIG_FILES
            .iter()
            .chain(std::iter::once(&SYSTEM_CONFIG_FILE))
            .find(|p| Path::new(p).exists())
            .map(|p| p.to_string())
    }
}

fn is_toml(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub assets_path: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}
