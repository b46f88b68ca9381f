use crate::engine::{AnalysisContext, NodeId};

/// Cardinality of a value's points-to set, optionally with its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsToSummary {
    pub size: usize,
    pub members: Option<Vec<String>>,
}

/// Size of the points-to set of `node`.
pub fn set_size(ctx: &AnalysisContext, node: NodeId) -> usize {
    ctx.points_to(node).count()
}

/// Summarize the points-to set of `node`. With `with_members`, each member is
/// rendered through the engine's textual node representation.
pub fn summarize(ctx: &AnalysisContext, node: NodeId, with_members: bool) -> PointsToSummary {
    let members = with_members.then(|| {
        ctx.points_to(node)
            .iter()
            .map(|member| ctx.node_text(member).to_string())
            .collect()
    });
    PointsToSummary {
        size: set_size(ctx, node),
        members,
    }
}
