//! Logger configuration, loadable from YAML

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, LoggerResult};
use crate::logging::{LogMode, DEFAULT_LOG_DIR};

/// Logger configuration
///
/// ```yaml
/// destinations: [console, file]
/// prefix: "[app]"
/// log_dir: logs
/// ```
///
/// Every field is optional; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Active destinations (default: console only)
    pub destinations: LogMode,

    /// Text inserted between the timestamp and the severity tag
    pub prefix: String,

    /// Directory for the dated log file
    pub log_dir: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            destinations: LogMode::default(),
            prefix: String::new(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl LoggerConfig {
    pub fn new(destinations: LogMode) -> Self {
        Self {
            destinations,
            ..Self::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> LoggerResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| LoggerError::config(format!("Failed to parse YAML: {}", e)))
    }

    /// Load configuration from a YAML file
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> LoggerResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LoggerError::config(format!("Failed to serialize YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.destinations, LogMode::CONSOLE);
        assert_eq!(config.prefix, "");
        assert_eq!(config.log_dir, PathBuf::from("logs"));

        // empty mapping falls back to the same defaults
        assert_eq!(LoggerConfig::from_yaml_str("{}").unwrap(), config);
    }

    #[test]
    fn test_parse_full() {
        let yaml = r#"
destinations: [console, file]
prefix: "[app]"
log_dir: /var/log/app
"#;
        let config = LoggerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.destinations, LogMode::CONSOLE.union(LogMode::FILE));
        assert_eq!(config.prefix, "[app]");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/app"));
    }

    #[test]
    fn test_parse_errors() {
        let err = LoggerConfig::from_yaml_str("destinations: [printer]").unwrap_err();
        assert!(matches!(err, LoggerError::Config(_)));

        // gui parses; the logger rejects it at init
        let config = LoggerConfig::from_yaml_str("destinations: [gui]").unwrap();
        assert_eq!(config.destinations, LogMode::GUI);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::load(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_yaml_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logger.yaml");
        let config = LoggerConfig::new(LogMode::FILE)
            .with_prefix("[worker]")
            .with_log_dir("out");

        fs::write(&path, config.to_yaml().unwrap()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("file"));
        assert!(content.contains("[worker]"));

        assert_eq!(LoggerConfig::load(&path).unwrap(), config);
    }
}
