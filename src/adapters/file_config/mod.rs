// File config adapter - Settings from YAML or TOML config files

use crate::domain::errors::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Base name of the config file searched for in the home and working directories
pub const CONFIG_FILE_STEM: &str = ".yt-stats";

/// Settings a config file may provide; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub api_base_url: Option<String>,
}

/// Config file adapter
pub struct FileConfigAdapter;

impl FileConfigAdapter {
    /// Load a config file, choosing the parser by extension
    pub fn load(path: &Path) -> Result<FileConfig, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::parse_yaml(&content),
            _ => Self::parse_toml(&content),
        }
        .map_err(|e| DomainError::Config(format!("{}: {}", path.display(), e)))
    }

    fn parse_yaml(content: &str) -> Result<FileConfig, String> {
        // An empty YAML document deserializes as null
        if content.trim().is_empty() {
            return Ok(FileConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| format!("failed to parse YAML config: {}", e))
    }

    fn parse_toml(content: &str) -> Result<FileConfig, String> {
        toml::from_str(content).map_err(|e| format!("failed to parse TOML config: {}", e))
    }

    /// Candidate config file locations, in lookup order
    pub fn default_locations(home: Option<&Path>) -> Vec<PathBuf> {
        let mut locations = Vec::new();
        for ext in ["yaml", "toml"] {
            let file_name = format!("{}.{}", CONFIG_FILE_STEM, ext);
            if let Some(home) = home {
                locations.push(home.join(&file_name));
            }
            locations.push(PathBuf::from(".").join(&file_name));
        }
        locations
    }

    /// First existing default config file, if any
    pub fn discover(home: Option<&Path>) -> Option<PathBuf> {
        Self::default_locations(home)
            .into_iter()
            .find(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".yt-stats.yaml");
        fs::write(&path, "apiKey: abc\nport: 9000\nlogLevel: debug\n").unwrap();

        let config = FileConfigAdapter::load(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.port, Some(9000));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.api_base_url, None);
    }

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "apiKey = \"xyz\"\napiBaseUrl = \"http://localhost:1234\"\n").unwrap();

        let config = FileConfigAdapter::load(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("xyz"));
        assert_eq!(config.api_base_url.as_deref(), Some("http://localhost:1234"));
    }

    #[test]
    fn test_load_empty_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.yml");
        fs::write(&path, "").unwrap();

        assert_eq!(FileConfigAdapter::load(&path).unwrap(), FileConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "port: [not, a, number]\n").unwrap();

        assert!(matches!(FileConfigAdapter::load(&path), Err(DomainError::Config(_))));
        assert!(FileConfigAdapter::load(&dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_discover_prefers_home_yaml() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(".yt-stats.toml"), "port = 1").unwrap();
        fs::write(home.path().join(".yt-stats.yaml"), "port: 2").unwrap();

        let found = FileConfigAdapter::discover(Some(home.path())).unwrap();
        assert_eq!(found, home.path().join(".yt-stats.yaml"));
    }
}
