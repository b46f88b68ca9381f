use super::PointsTo;
use crate::engine::AnalysisContext;
use crate::paths::ReportKind;
use crate::reports::Report;
use crate::reports::builder::{BuilderConfig, TextPatternDescriber, build_document};
use crate::types::ReportDocument;

/// Points-to set sizes of every analyzed function
#[derive(Debug, Default)]
pub struct PointsToReport {
    pub document: ReportDocument,
}

impl Report for PointsTo {
    type Output = PointsToReport;

    fn kind(&self) -> ReportKind {
        ReportKind::PointsTo
    }

    fn build(&self, ctx: &AnalysisContext) -> Self::Output {
        let describer = TextPatternDescriber::new(BuilderConfig::points_to(self.list_members));
        PointsToReport {
            document: build_document(ctx, &describer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::test_utils::context_from_json;
    use rstest::rstest;

    #[rstest]
    fn test_build_single_function() {
        let ctx = context_from_json(fixtures::SINGLE_FUNCTION);
        let report = PointsTo::default().build(&ctx);
        assert_eq!(report.document.len(), 1);
        assert_eq!(report.document.functions[0].return_set_size, 3);
        assert_eq!(report.document.functions[0].return_members, None);
    }

    #[rstest]
    fn test_build_with_members() {
        let ctx = context_from_json(fixtures::SINGLE_FUNCTION);
        let report = PointsTo { list_members: true }.build(&ctx);
        let f = &report.document.functions[0];
        assert_eq!(f.return_members.as_ref().map(Vec::len), Some(3));
        assert_eq!(f.arguments[0].members, Some(vec!["ObjVar ID: 7 (heap)".to_string()]));
    }

    #[rstest]
    fn test_build_empty_program() {
        let ctx = context_from_json("{}");
        assert!(PointsTo::default().build(&ctx).document.is_empty());
    }
}
