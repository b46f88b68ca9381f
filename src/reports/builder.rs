//! Per-function record construction.
//!
//! One loop over the engine's functions serves every report. What differs
//! between reports is only which optional fields get filled, which is what
//! [`BuilderConfig`] captures. Turning an engine function into a record goes
//! through [`FunctionDescriber`], so a structured engine API can replace the
//! text-pattern describer without touching the encoders.

use crate::engine::{AnalysisContext, AnalyzedFunction};
use crate::extract;
use crate::queries::points_to::summarize;
use crate::types::{ArgumentMetadata, ArgumentRecord, FunctionRecord, ReportDocument};

/// Which optional record fields to populate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Per-argument points-to set sizes
    pub points_to_sizes: bool,
    /// Per-argument type, name and source file
    pub metadata: bool,
    /// Textual rendering of every points-to member
    pub members: bool,
}

impl BuilderConfig {
    pub fn points_to(members: bool) -> Self {
        Self {
            points_to_sizes: true,
            metadata: false,
            members,
        }
    }

    pub fn arguments_comparison() -> Self {
        Self {
            points_to_sizes: false,
            metadata: true,
            members: false,
        }
    }
}

/// Describes one engine function as a report record.
pub trait FunctionDescriber {
    fn describe(&self, ctx: &AnalysisContext, function: &AnalyzedFunction) -> FunctionRecord;
}

/// Describer that recovers names and argument metadata from the engine's
/// textual node renderings.
#[derive(Debug, Clone, Copy)]
pub struct TextPatternDescriber {
    config: BuilderConfig,
}

impl TextPatternDescriber {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }
}

impl FunctionDescriber for TextPatternDescriber {
    fn describe(&self, ctx: &AnalysisContext, function: &AnalyzedFunction) -> FunctionRecord {
        let name = extract::function_name(&function.signature);
        if name.is_empty() {
            log::debug!("No function name in signature {:?}", function.signature);
        }

        let ret = summarize(ctx, function.return_node, self.config.members);
        let mut record = FunctionRecord::new(name, ret.size);
        record.return_members = ret.members;

        for (index, &arg) in function.arguments().iter().enumerate() {
            let mut argument = ArgumentRecord::new(index);

            if self.config.points_to_sizes {
                let pts = summarize(ctx, arg, self.config.members);
                argument = argument.with_size(pts.size);
                if let Some(members) = pts.members {
                    argument = argument.with_members(members);
                }
            }

            if self.config.metadata {
                let text = ctx.node_text(arg);
                argument = argument.with_metadata(ArgumentMetadata {
                    ty: extract::argument_type(text),
                    name: extract::argument_name(text),
                    file: extract::source_file(text),
                });
            }

            record.arguments.push(argument);
        }

        record
    }
}

/// Describe every analyzed function, in engine order.
pub fn build_document(ctx: &AnalysisContext, describer: &dyn FunctionDescriber) -> ReportDocument {
    ReportDocument {
        functions: ctx
            .functions()
            .iter()
            .map(|function| describer.describe(ctx, function))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::test_utils::context_from_json;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ctx() -> AnalysisContext {
        context_from_json(fixtures::MAIN_CALLS_F)
    }

    #[rstest]
    fn test_points_to_config_fills_sizes_only(ctx: AnalysisContext) {
        let doc = build_document(&ctx, &TextPatternDescriber::new(BuilderConfig::points_to(false)));
        assert_eq!(doc.len(), 2);

        let f = &doc.functions[1];
        assert_eq!(f.name, "f");
        assert_eq!(f.return_set_size, 3);
        assert_eq!(f.return_members, None);
        let sizes: Vec<_> = f.arguments.iter().map(|a| a.points_to_set_size).collect();
        assert_eq!(sizes, vec![Some(1), Some(0)]);
        assert!(f.arguments.iter().all(|a| a.metadata.is_none()));
    }

    #[rstest]
    fn test_no_registered_arguments_yields_empty_list(ctx: AnalysisContext) {
        let doc = build_document(&ctx, &TextPatternDescriber::new(BuilderConfig::points_to(false)));
        let main = &doc.functions[0];
        assert_eq!(main.name, "main");
        assert_eq!(main.return_set_size, 0);
        assert!(main.arguments.is_empty());
    }

    #[rstest]
    fn test_comparison_config_fills_metadata_only(ctx: AnalysisContext) {
        let doc = build_document(&ctx, &TextPatternDescriber::new(BuilderConfig::arguments_comparison()));
        let f = &doc.functions[1];
        assert!(f.arguments.iter().all(|a| a.points_to_set_size.is_none()));
        assert_eq!(
            f.arguments[0].metadata,
            Some(ArgumentMetadata {
                ty: "i32*".to_string(),
                name: "x".to_string(),
                file: "/a/b.c".to_string(),
            })
        );
        assert_eq!(f.arguments[1].metadata.as_ref().map(|m| m.file.as_str()), Some(""));
    }

    #[rstest]
    fn test_members_rendered_through_node_text(ctx: AnalysisContext) {
        let doc = build_document(&ctx, &TextPatternDescriber::new(BuilderConfig::points_to(true)));
        let f = &doc.functions[1];
        assert_eq!(
            f.return_members.as_deref(),
            Some(
                &[
                    "ObjVar ID: 7 (heap)".to_string(),
                    "ObjVar ID: 8 (stack)".to_string(),
                    "ObjVar ID: 9 (global)".to_string(),
                ][..]
            )
        );
        assert_eq!(f.arguments[1].members, Some(vec![]));
    }

    #[rstest]
    fn test_unmatched_signature_gives_empty_name() {
        let ctx = context_from_json(
            r#"{"functions": [{"signature": "define void @g()", "return_node": 1}],
                "nodes": {"1": "ret"}}"#,
        );
        let doc = build_document(&ctx, &TextPatternDescriber::new(BuilderConfig::points_to(false)));
        assert_eq!(doc.functions[0].name, "");
    }
}
