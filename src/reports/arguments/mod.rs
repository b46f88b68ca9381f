//! Arguments-comparison report: per-argument type, name and source file.

mod execute;
mod output;

pub use execute::ComparisonReport;

/// Arguments-comparison report request
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsComparison;
