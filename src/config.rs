//! Configuration file handling.
//!
//! This module loads the optional `.pta_report.json` file and layers it
//! between the built-in defaults and the command line.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::DEFAULT_EXPORT_SUFFIX;
use crate::output::ReportFormat;
use crate::paths::{DEFAULT_CALL_GRAPH_FLAG, DEFAULT_REPORT_DIR};

/// Config file looked up in the current directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = ".pta_report.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },
}

/// Top-level configuration file structure. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory reports are written to
    pub report_dir: Option<PathBuf>,
    /// Suffix appended to a module path to find its engine export
    pub export_suffix: Option<String>,
    /// Mode value selecting the call-graph dump
    pub call_graph_flag: Option<String>,
    /// Encoding of the points-to report
    pub format: Option<ReportFormat>,
    /// List points-to members in the flat encoding
    pub list_members: Option<bool>,
}

impl ConfigFile {
    /// Load configuration.
    ///
    /// With an explicit `path`, the file must exist. Without one,
    /// `.pta_report.json` in the current directory is used if present and
    /// defaults apply otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicitly given file doesn't exist
    /// - The file cannot be read
    /// - The JSON is invalid or has unknown keys
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !config_path.exists() {
            if required {
                return Err(ConfigError::NotFound {
                    path: config_path.display().to_string(),
                });
            }
            log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadFailed {
            path: config_path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::parse(&content, &config_path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::InvalidJson {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Effective settings for one run after layering defaults, config file and
/// command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub report_dir: PathBuf,
    pub export_suffix: String,
    pub call_graph_flag: String,
    pub format: ReportFormat,
    pub list_members: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            export_suffix: DEFAULT_EXPORT_SUFFIX.to_string(),
            call_graph_flag: DEFAULT_CALL_GRAPH_FLAG.to_string(),
            format: ReportFormat::default(),
            list_members: false,
        }
    }
}

impl Settings {
    /// Apply the values set in `config` over the defaults.
    pub fn from_config(config: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            report_dir: config.report_dir.unwrap_or(defaults.report_dir),
            export_suffix: config.export_suffix.unwrap_or(defaults.export_suffix),
            call_graph_flag: config.call_graph_flag.unwrap_or(defaults.call_graph_flag),
            format: config.format.unwrap_or(defaults.format),
            list_members: config.list_members.unwrap_or(defaults.list_members),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::tempdir;

    #[rstest]
    fn test_full_deserialization() {
        let json = r#"
        {
            "report_dir": "/tmp/reports",
            "export_suffix": ".export.json",
            "call_graph_flag": "-dump-callgraph",
            "format": "structured",
            "list_members": true
        }
        "#;
        let config = ConfigFile::parse(json, Path::new("test.json")).unwrap();
        assert_eq!(config.report_dir, Some(PathBuf::from("/tmp/reports")));
        assert_eq!(config.format, Some(ReportFormat::Structured));
        assert_eq!(config.list_members, Some(true));
    }

    #[rstest]
    fn test_empty_object_is_all_defaults() {
        let config = ConfigFile::parse("{}", Path::new("test.json")).unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(Settings::from_config(config), Settings::default());
    }

    #[rstest]
    fn test_unknown_key_rejected() {
        let result = ConfigFile::parse(r#"{"reportdir": "/x"}"#, Path::new("test.json"));
        assert!(matches!(result, Err(ConfigError::InvalidJson { .. })));
    }

    #[rstest]
    fn test_invalid_json() {
        let result = ConfigFile::parse("{ invalid json }", Path::new("test.json"));
        assert!(matches!(result, Err(ConfigError::InvalidJson { .. })));
    }

    #[rstest]
    fn test_settings_partial_override() {
        let config = ConfigFile {
            report_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        let settings = Settings::from_config(config);
        assert_eq!(settings.report_dir, PathBuf::from("out"));
        assert_eq!(settings.call_graph_flag, DEFAULT_CALL_GRAPH_FLAG);
        assert_eq!(settings.export_suffix, ".pta.json");
    }

    #[rstest]
    fn test_load_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let result = ConfigFile::load(Some(dir.path().join("nope.json").as_path()));
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[rstest]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"format": "flat", "list_members": true}"#).unwrap();

        let config = ConfigFile::load(Some(path.as_path())).unwrap();
        assert_eq!(config.format, Some(ReportFormat::Flat));
        assert_eq!(config.list_members, Some(true));
    }
}
