//! Storage location and host settings

use crate::error::{CliError, CliResult};
use serde::Deserialize;
use snipstash_templates::StoreConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the storage directory
pub const HOME_ENV: &str = "SNIPSTASH_HOME";

/// Optional settings file inside the storage directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Resolves where templates are stored
pub struct PathResolver;

impl PathResolver {
    /// Resolve the storage directory
    ///
    /// Priority:
    /// 1. explicit `--storage-dir`
    /// 2. SNIPSTASH_HOME environment variable
    /// 3. platform data directory (e.g. ~/.local/share/snipstash)
    /// 4. ~/.snipstash
    pub fn resolve_storage_dir(explicit: Option<&Path>) -> CliResult<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }

        if let Ok(home_override) = std::env::var(HOME_ENV) {
            if !home_override.trim().is_empty() {
                return Ok(PathBuf::from(home_override));
            }
        }

        if let Some(data_dir) = dirs::data_dir() {
            return Ok(data_dir.join("snipstash"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            return Ok(home_dir.join(".snipstash"));
        }

        Err(CliError::Config(
            "Could not determine a storage directory".to_string(),
        ))
    }
}

/// Settings read from `config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub author: Option<String>,
    pub collection_name: Option<String>,
    pub collection_description: Option<String>,
}

impl HostConfig {
    /// Load `config.yaml` from the storage directory.
    ///
    /// A missing file yields defaults. A malformed file yields defaults plus
    /// a warning for the user.
    pub fn load(storage_dir: &Path) -> (Self, Option<String>) {
        let path = storage_dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No {} found, using defaults", CONFIG_FILE);
                return (Self::default(), None);
            }
            Err(e) => {
                return (
                    Self::default(),
                    Some(format!("Could not read {}: {}", CONFIG_FILE, e)),
                )
            }
        };

        Self::parse(&content)
    }

    fn parse(content: &str) -> (Self, Option<String>) {
        if content.trim().is_empty() {
            return (Self::default(), None);
        }
        match serde_yaml::from_str(content) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("Ignoring malformed {}: {}", CONFIG_FILE, e)),
            ),
        }
    }

    /// Build the store configuration for `storage_dir`
    pub fn store_config(&self, storage_dir: PathBuf) -> StoreConfig {
        let mut config = StoreConfig::new(storage_dir);
        if let Some(author) = non_blank(&self.author) {
            config = config.with_author(author);
        }
        if let Some(name) = non_blank(&self.collection_name) {
            config = config.with_collection_name(name);
        }
        if let Some(description) = non_blank(&self.collection_description) {
            config = config.with_collection_description(description);
        }
        config
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = PathResolver::resolve_storage_dir(Some(Path::new("/tmp/snip-explicit"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/snip-explicit"));
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        let (config, warning) = HostConfig::load(dir.path());
        assert_eq!(config, HostConfig::default());
        assert!(warning.is_none());
    }

    #[test]
    fn test_parse_config() {
        let (config, warning) = HostConfig::parse("author: Ada\ncollection_name: Mine\n");
        assert!(warning.is_none());
        assert_eq!(config.author.as_deref(), Some("Ada"));
        assert_eq!(config.collection_name.as_deref(), Some("Mine"));
        assert_eq!(config.collection_description, None);
    }

    #[test]
    fn test_malformed_config_warns() {
        let (config, warning) = HostConfig::parse("author: [unclosed");
        assert_eq!(config, HostConfig::default());
        assert!(warning.unwrap().contains(CONFIG_FILE));
    }

    #[test]
    fn test_store_config_applies_overrides() {
        let host = HostConfig {
            author: Some("Ada".to_string()),
            collection_name: Some("  ".to_string()),
            collection_description: Some("Team templates".to_string()),
        };
        let config = host.store_config(PathBuf::from("/tmp/snip"));
        assert_eq!(config.author, "Ada");
        assert_eq!(config.collection_name, "Custom Templates");
        assert_eq!(
            config.collection_description.as_deref(),
            Some("Team templates")
        );
    }
}
