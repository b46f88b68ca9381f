//! Report encodings.
//!
//! Supports two encodings: flat (line-oriented, human-readable) and
//! structured (a hand-assembled, JSON-shaped document). The structured
//! encoding is built line by line so that key order follows the engine's
//! iteration order and repeated function names stay repeated.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Encoding of a per-function report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Line-oriented text, one blank line between functions
    #[default]
    Flat,
    /// Nested JSON-shaped document
    Structured,
}

/// Trait for report documents that can be encoded for disk
pub trait Encodable {
    /// Encode as flat, line-oriented text. Reports written only in the
    /// structured encoding keep this default.
    fn to_flat(&self) -> String {
        self.to_structured()
    }

    /// Encode as a nested structured document
    fn to_structured(&self) -> String;

    /// Encode according to the requested format
    fn encode(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Flat => self.to_flat(),
            ReportFormat::Structured => self.to_structured(),
        }
    }
}

/// Quote a string for the structured encoding.
pub fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_default()
}

/// Element separator for position `index` in a sequence of `len` elements:
/// a comma between elements, nothing after the last one.
pub fn separator(index: usize, len: usize) -> &'static str {
    if index + 1 < len { "," } else { "" }
}

/// Indentation for nesting level `depth`.
pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
