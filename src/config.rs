//! Configuration for bridge model construction
//!
//! This module defines the configuration consulted when bridge models are
//! constructed. It can be loaded from a file so that a bridge deployment
//! can change the defaults without recompiling.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::{BridgeError, Result};

/// Bridge model configuration
///
/// Holds the default applied when a [`crate::MatrixUser`] is constructed
/// through [`crate::MatrixUser::with_config`]. The flag is read at
/// construction time only; changing it later affects instances constructed
/// afterwards, never existing ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Whether new users escape disallowed localpart characters
    escape_user_ids: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            escape_user_ids: true,
        }
    }
}

impl BridgeConfig {
    /// Creates a new configuration with escaping enabled
    #[instrument(level = "debug")]
    pub fn new() -> Self {
        debug!("🔧 Creating new BridgeConfig");
        Self::default()
    }

    /// Whether users constructed with this configuration escape their
    /// localpart by default
    pub fn escape_user_ids(&self) -> bool {
        self.escape_user_ids
    }

    /// Change the escape default for subsequently constructed users
    pub fn set_escape_user_ids(&mut self, escape: bool) {
        self.escape_user_ids = escape;
    }

    /// Load configuration from a file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BridgeError::Config(format!("Failed to read config file: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| BridgeError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &PathBuf) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BridgeError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)
            .map_err(|e| BridgeError::Config(format!("Failed to write config file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;
    use test_log::test;

    #[test]
    fn test_config_default() {
        let config = BridgeConfig::default();
        assert!(config.escape_user_ids());
    }

    #[test]
    fn test_config_toggle() {
        let mut config = BridgeConfig::new();
        assert!(config.escape_user_ids());

        config.set_escape_user_ids(false);
        assert!(!config.escape_user_ids());

        config.set_escape_user_ids(true);
        assert!(config.escape_user_ids());
    }

    #[test]
    fn test_config_serialization() {
        let config = BridgeConfig::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: BridgeConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config.escape_user_ids(), deserialized.escape_user_ids());
    }

    #[test]
    fn test_config_file_operations() {
        let mut config = BridgeConfig::default();
        config.set_escape_user_ids(false);
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        // Test saving
        config.save_to_file(&path).unwrap();

        // Test loading
        let loaded = BridgeConfig::from_file(&path).unwrap();
        assert!(!loaded.escape_user_ids());

        // Cleanup
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_config_missing_file() {
        let path = PathBuf::from("/nonexistent/bridge-config.json");
        let err = BridgeConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
