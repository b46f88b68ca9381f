//! Output naming and report directory setup.
//!
//! Report names are derived from the last input module path:
//! `<dir>/<prefix>_<kind>_<suffix>`, where the prefix comes from the module's
//! parent directory and the suffix is the module's base name up to its first
//! `.`. Modules directly under an `llvm` directory get the prefix `source`;
//! anything else uses the last two characters of the directory name.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Directory reports land in unless configured otherwise.
pub const DEFAULT_REPORT_DIR: &str = "/app/output/reports/";

/// Mode value that selects the call-graph dump.
pub const DEFAULT_CALL_GRAPH_FLAG: &str = "-brief-constraint-graph";

const SOURCE_SUBDIRECTORY: &str = "llvm";
const SOURCE_PREFIX: &str = "source";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("Input path '{path}' has no parent directory to derive a report prefix from")]
    MissingSubdirectory { path: String },

    #[error("Directory '{subdirectory}' of input path '{path}' is shorter than two characters")]
    SubdirectoryTooShort { path: String, subdirectory: String },

    #[error("Input path '{path}' has an empty base name")]
    EmptyStem { path: String },
}

/// Which artifacts a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Points-to report and arguments-comparison report
    Reports,
    /// Call-graph dump only
    CallGraph,
}

impl OutputMode {
    pub fn from_flag(flag: &str, call_graph_flag: &str) -> Self {
        if flag == call_graph_flag {
            OutputMode::CallGraph
        } else {
            OutputMode::Reports
        }
    }
}

/// Kind of artifact; part of the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    PointsTo,
    ArgumentsComparison,
    CallGraph,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::PointsTo => "points_to_analysis",
            ReportKind::ArgumentsComparison => "arguments_comparison",
            ReportKind::CallGraph => "call_graph",
        }
    }
}

/// Resolved naming for every artifact of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub directory: PathBuf,
    pub prefix: String,
    pub suffix: String,
    pub mode: OutputMode,
}

impl OutputTarget {
    /// Derive prefix and suffix from `input`.
    pub fn resolve(input: &Path, directory: &Path, mode: OutputMode) -> Result<Self, PathError> {
        let text = input.to_string_lossy();
        let parts: Vec<&str> = text.split(std::path::is_separator).collect();

        if parts.len() < 2 {
            return Err(PathError::MissingSubdirectory {
                path: text.to_string(),
            });
        }
        let subdirectory = parts[parts.len() - 2];
        let base = parts[parts.len() - 1];

        let prefix = derive_prefix(subdirectory).ok_or_else(|| PathError::SubdirectoryTooShort {
            path: text.to_string(),
            subdirectory: subdirectory.to_string(),
        })?;

        let suffix = base.split('.').next().unwrap_or("");
        if suffix.is_empty() {
            return Err(PathError::EmptyStem {
                path: text.to_string(),
            });
        }

        Ok(Self {
            directory: directory.to_path_buf(),
            prefix,
            suffix: suffix.to_string(),
            mode,
        })
    }

    /// Path of the artifact of kind `kind`.
    pub fn file_for(&self, kind: ReportKind) -> PathBuf {
        self.directory
            .join(format!("{}_{}_{}", self.prefix, kind.as_str(), self.suffix))
    }

    /// Create the report directory if needed. A failure is logged and
    /// reported back, but callers keep going and let each write fail on its
    /// own.
    pub fn ensure_directory(&self) -> bool {
        if self.directory.is_dir() {
            return true;
        }
        match fs::create_dir_all(&self.directory) {
            Ok(()) => {
                log::debug!("Created report directory {}", self.directory.display());
                true
            }
            Err(e) => {
                log::error!(
                    "Failed to create directory: {} ({})",
                    self.directory.display(),
                    e
                );
                false
            }
        }
    }
}

fn derive_prefix(subdirectory: &str) -> Option<String> {
    if subdirectory == SOURCE_SUBDIRECTORY {
        return Some(SOURCE_PREFIX.to_string());
    }
    let chars: Vec<char> = subdirectory.chars().collect();
    if chars.len() < 2 {
        return None;
    }
    Some(chars[chars.len() - 2..].iter().collect())
}
