//! Points-to report: return-value and per-argument points-to set sizes.

mod execute;
mod output;

pub use execute::PointsToReport;

/// Points-to report request
#[derive(Debug, Clone, Copy, Default)]
pub struct PointsTo {
    /// List every member of each points-to set in the flat encoding
    pub list_members: bool,
}
