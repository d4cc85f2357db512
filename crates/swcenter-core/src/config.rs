//! Configuration types.
//!
//! Configuration lives in `<config dir>/software-center/config.toml`. Every
//! field has a default, so a missing file or a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::desktop::DesktopPaths;
use crate::error::ConfigError;

/// Number of entries kept by the navigation history.
pub const DEFAULT_HISTORY_SIZE: usize = 25;

/// Runtime configuration read from config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Launcher integration settings
    #[serde(default)]
    pub launcher: LauncherConfig,

    /// Desktop file locations
    #[serde(default)]
    pub paths: DesktopPaths,

    /// Back/forward navigation settings
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Launcher integration configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Pin newly installed applications to the launcher.
    #[serde(default = "default_true")]
    pub add_to_launcher: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            add_to_launcher: true,
        }
    }
}

/// Navigation history configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Maximum number of back/forward entries.
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

impl StoreConfig {
    /// Load the user's config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::parse(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("software-center"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StoreConfig::parse("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert!(config.launcher.add_to_launcher);
        assert_eq!(config.navigation.history_size, DEFAULT_HISTORY_SIZE);
        assert_eq!(
            config.paths.applications_dir,
            PathBuf::from("/usr/share/applications")
        );
    }

    #[test]
    fn test_partial_config() {
        let config = StoreConfig::parse(
            r#"
            [launcher]
            add_to_launcher = false

            [paths]
            applications_dir = "/opt/share/applications"
            "#,
        )
        .unwrap();

        assert!(!config.launcher.add_to_launcher);
        assert_eq!(
            config.paths.applications_dir,
            PathBuf::from("/opt/share/applications")
        );
        // Untouched sections keep their defaults
        assert_eq!(
            config.paths.app_install_dir,
            PathBuf::from("/usr/share/app-install/desktop")
        );
        assert_eq!(config.navigation.history_size, DEFAULT_HISTORY_SIZE);
    }

    #[test]
    fn test_parse_error() {
        let result = StoreConfig::parse("[launcher]\nadd_to_launcher = \"yes\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[navigation]\nhistory_size = 5").unwrap();

        let config = StoreConfig::load_from(file.path()).unwrap();
        assert_eq!(config.navigation.history_size, 5);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = StoreConfig::load_from(&dir.path().join("config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
