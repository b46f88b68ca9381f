//! Call-graph dump: hands the resolved path to the engine's call graph.

use std::path::PathBuf;

use super::ReportError;
use crate::engine::AnalysisContext;
use crate::paths::{OutputTarget, ReportKind};

/// Ask the engine's recovered call graph to write itself.
pub fn dump(ctx: &AnalysisContext, target: &OutputTarget) -> Result<PathBuf, ReportError> {
    let path = target.file_for(ReportKind::CallGraph);
    let graph = ctx.call_graph();

    let written = graph.dump(&path).map_err(|e| ReportError::CallGraphDumpFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    log::info!(
        "Wrote call graph with {} node(s) and {} edge(s) to {}",
        graph.node_count(),
        graph.edge_count(),
        written.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::paths::OutputMode;
    use crate::test_utils::context_from_json;
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    #[rstest]
    fn test_dump_writes_engine_graph() {
        let dir = tempdir().unwrap();
        let ctx = context_from_json(fixtures::MAIN_CALLS_F);
        let target = OutputTarget::resolve(Path::new("t/xyz/bar.bc"), dir.path(), OutputMode::CallGraph).unwrap();

        let written = dump(&ctx, &target).unwrap();
        assert_eq!(written, dir.path().join("yz_call_graph_bar.dot"));

        let dot = fs::read_to_string(written).unwrap();
        assert!(dot.contains("Node0 [shape=box,label=\"main\"];"));
        assert!(dot.contains("Node0 -> Node1"));
    }

    #[rstest]
    fn test_dump_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let ctx = context_from_json(fixtures::MAIN_CALLS_F);
        let target =
            OutputTarget::resolve(Path::new("t/xyz/bar.bc"), &dir.path().join("missing"), OutputMode::CallGraph)
                .unwrap();

        assert!(matches!(dump(&ctx, &target), Err(ReportError::CallGraphDumpFailed { .. })));
    }
}
