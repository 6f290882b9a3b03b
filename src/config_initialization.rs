//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use crate::adapters::file_config::{FileConfig, FileConfigAdapter};
use crate::adapters::youtube_api::DEFAULT_API_BASE_URL;
use crate::domain::errors::DomainError;

/// Port the API server listens on when nothing else is configured
pub const DEFAULT_PORT: u16 = 8998;

/// Log level used when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolved application configuration, built once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub port: u16,
    pub log_level: String,
    pub log_json: bool,
    pub api_base_url: String,
    /// Config file the values were read from, if any
    pub config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            config_file: None,
        }
    }
}

impl AppConfig {
    /// The provider credential, or `MissingCredential` if unset or blank
    pub fn require_api_key(&self) -> Result<&str, DomainError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(DomainError::MissingCredential),
        }
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(api_key) = file.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(log_level) = file.log_level {
            self.log_level = log_level;
        }
        if let Some(api_base_url) = file.api_base_url {
            self.api_base_url = api_base_url;
        }
    }

    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(api_key) = &overrides.api_key {
            self.api_key = Some(api_key.clone());
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(log_level) = &overrides.log_level {
            self.log_level = log_level.clone();
        }
        if let Some(api_base_url) = &overrides.api_base_url {
            self.api_base_url = api_base_url.clone();
        }
        self.log_json |= overrides.log_json;
    }
}

/// Values given on the command line or through `YTSTATS_*` environment variables
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub api_key: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub log_json: bool,
    pub api_base_url: Option<String>,
}

/// Initialize configuration hierarchy following precedence: CLI > Env > File > Defaults
///
/// An explicit config file must exist and parse. Otherwise the default
/// locations under `home` and the working directory are searched.
pub fn initialize_configuration_hierarchy(
    overrides: &ConfigOverrides,
    home: Option<&Path>,
) -> Result<AppConfig, DomainError> {
    let mut config = AppConfig::default();

    let config_file = match &overrides.config_file {
        Some(path) => Some(path.clone()),
        None => FileConfigAdapter::discover(home),
    };

    if let Some(path) = &config_file {
        config.apply_file(FileConfigAdapter::load(path)?);
        config.config_file = Some(path.clone());
    }

    config.apply_overrides(overrides);
    Ok(config)
}

/// Home directory used for config file discovery
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
}
