//! Report generation.
//!
//! Each report lives in its own module with:
//! - The request struct implementing [`Report`]
//! - `execute.rs` building the report document from the analysis context
//! - `output.rs` encoding it for disk
//!
//! A failed report is logged and skipped; it never stops the other reports.

pub mod arguments;
mod builder;
pub mod call_graph;
pub mod points_to;

pub use builder::{BuilderConfig, FunctionDescriber, TextPatternDescriber, build_document};

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use crate::engine::AnalysisContext;
use crate::output::{Encodable, ReportFormat};
use crate::paths::{OutputMode, OutputTarget, ReportKind};
use arguments::ArgumentsComparison;
use points_to::PointsTo;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to open file: {path} ({message})")]
    OpenFailed { path: String, message: String },

    #[error("Failed to write file: {path} ({message})")]
    WriteFailed { path: String, message: String },

    #[error("Failed to dump call graph to {path} ({message})")]
    CallGraphDumpFailed { path: String, message: String },
}

/// Trait for reports built from the analysis context.
pub trait Report {
    type Output: Encodable;

    fn kind(&self) -> ReportKind;

    fn build(&self, ctx: &AnalysisContext) -> Self::Output;
}

/// Options shared by the per-function reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Encoding of the points-to report
    pub format: ReportFormat,
    /// List points-to members in the flat encoding
    pub list_members: bool,
}

/// Outcome of one run: artifacts written and artifacts that failed.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<ReportKind>,
}

impl RunSummary {
    fn record(&mut self, kind: ReportKind, result: Result<PathBuf, ReportError>) {
        match result {
            Ok(path) => self.written.push(path),
            Err(e) => {
                log::error!("{}", e);
                self.failed.push(kind);
            }
        }
    }
}

/// Build `report`, encode it and write it to its target file.
///
/// The report is fully encoded before the file is opened, so a failed open
/// leaves nothing behind.
pub fn write_report<R: Report>(
    report: &R,
    ctx: &AnalysisContext,
    target: &OutputTarget,
    format: ReportFormat,
) -> Result<PathBuf, ReportError> {
    let path = target.file_for(report.kind());
    let contents = report.build(ctx).encode(format);

    let mut file = File::create(&path).map_err(|e| ReportError::OpenFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    file.write_all(contents.as_bytes())
        .map_err(|e| ReportError::WriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    log::info!(
        "Wrote {} report for {} function(s) to {}",
        report.kind().as_str(),
        ctx.functions().len(),
        path.display()
    );
    Ok(path)
}

/// Produce every artifact the target's mode asks for.
pub fn run(ctx: &AnalysisContext, target: &OutputTarget, options: ReportOptions) -> RunSummary {
    let mut summary = RunSummary::default();

    match target.mode {
        OutputMode::CallGraph => {
            summary.record(ReportKind::CallGraph, call_graph::dump(ctx, target));
        }
        OutputMode::Reports => {
            let points_to = PointsTo {
                list_members: options.list_members,
            };
            summary.record(
                ReportKind::PointsTo,
                write_report(&points_to, ctx, target, options.format),
            );
            summary.record(
                ReportKind::ArgumentsComparison,
                write_report(&ArgumentsComparison, ctx, target, ReportFormat::Structured),
            );
        }
    }

    summary
}
