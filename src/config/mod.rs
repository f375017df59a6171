// Application configuration.
// Reads an optional JSON file; every field falls back to a default.

pub mod paths;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Rows shown per table page when no config overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Default tracing filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// User-tunable settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rows per page in the event table.
    pub page_size: usize,
    /// Filter directive handed to the log subscriber when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Page size with a floor of one row.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Load from the default location, or defaults if no file exists there.
    pub fn load() -> Result<Self> {
        match paths::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific file. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeskError;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "page_size": 10 }}"#).unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.page_size(), 10);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_zero_page_size_is_floored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "page_size": 0, "log_level": "debug" }}"#).unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.page_size(), 1);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "page_size = 3").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, DeskError::Json(_)));
    }
}
