use super::ArgumentsComparison;
use crate::engine::AnalysisContext;
use crate::paths::ReportKind;
use crate::reports::Report;
use crate::reports::builder::{BuilderConfig, TextPatternDescriber, build_document};
use crate::types::ReportDocument;

/// Extracted argument metadata of every analyzed function
#[derive(Debug, Default)]
pub struct ComparisonReport {
    pub document: ReportDocument,
}

impl Report for ArgumentsComparison {
    type Output = ComparisonReport;

    fn kind(&self) -> ReportKind {
        ReportKind::ArgumentsComparison
    }

    fn build(&self, ctx: &AnalysisContext) -> Self::Output {
        let describer = TextPatternDescriber::new(BuilderConfig::arguments_comparison());
        ComparisonReport {
            document: build_document(ctx, &describer),
        }
    }
}
