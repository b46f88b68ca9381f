//! Snapshot backend: reads the engine's solved state from JSON export files.
//!
//! For every input module the engine leaves an export document next to it
//! (`<module><suffix>`). Loading merges the exports in input order into one
//! [`Program`] and one [`SnapshotSolver`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::EngineExport;
use super::{AnalysisContext, AnalyzedFunction, CallGraph, DotCallGraph, NodeId, PointsToSet, Program, Solver};

pub const DEFAULT_EXPORT_SUFFIX: &str = ".pta.json";

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("No input modules given")]
    NoModules,

    #[error("Failed to read engine export '{path}': {message}")]
    ExportReadFailed { path: String, message: String },

    #[error("Failed to parse engine export '{path}': {message}")]
    ExportParseFailed { path: String, message: String },
}

/// Solver answering points-to queries from exported sets.
#[derive(Debug, Default)]
pub struct SnapshotSolver {
    sets: HashMap<NodeId, PointsToSet>,
    empty: PointsToSet,
    call_graph: DotCallGraph,
}

impl SnapshotSolver {
    pub fn from_exports(exports: &[EngineExport]) -> Self {
        let mut solver = Self::default();
        for export in exports {
            for (node, members) in &export.points_to {
                let set = solver.sets.entry(*node).or_default();
                for member in members {
                    set.insert(*member);
                }
            }
            solver.call_graph.extend_from_export(&export.call_graph);
        }
        solver
    }
}

impl Solver for SnapshotSolver {
    fn points_to(&self, node: NodeId) -> &PointsToSet {
        self.sets.get(&node).unwrap_or(&self.empty)
    }

    fn call_graph(&self) -> &dyn CallGraph {
        &self.call_graph
    }
}

/// Loads engine exports for a module set.
#[derive(Debug, Clone)]
pub struct SnapshotLoader {
    export_suffix: String,
}

impl Default for SnapshotLoader {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_SUFFIX)
    }
}

impl SnapshotLoader {
    pub fn new(export_suffix: &str) -> Self {
        Self {
            export_suffix: export_suffix.to_string(),
        }
    }

    /// Path of the export document the engine wrote for `module`.
    pub fn export_path_for(&self, module: &Path) -> PathBuf {
        let mut path = module.as_os_str().to_owned();
        path.push(&self.export_suffix);
        PathBuf::from(path)
    }

    /// Load and solve the module set.
    pub fn load(&self, modules: &[PathBuf]) -> Result<AnalysisContext, EngineError> {
        if modules.is_empty() {
            return Err(EngineError::NoModules);
        }

        let mut exports = Vec::with_capacity(modules.len());
        for module in modules {
            let path = self.export_path_for(module);
            log::debug!("Loading engine export {}", path.display());
            let content = fs::read_to_string(&path).map_err(|e| EngineError::ExportReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            exports.push(parse_export(&content, &path)?);
        }

        Ok(build_context(modules.to_vec(), exports))
    }
}

pub fn parse_export(content: &str, path: &Path) -> Result<EngineExport, EngineError> {
    serde_json::from_str(content).map_err(|e| EngineError::ExportParseFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Build a context from in-memory export documents, as if each had been read
/// from disk for an unnamed module.
pub fn snapshot_context(documents: &[&str]) -> Result<AnalysisContext, EngineError> {
    let exports = documents
        .iter()
        .map(|doc| parse_export(doc, Path::new("<memory>")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(build_context(Vec::new(), exports))
}

/// Build the program representation and solver from parsed exports.
pub fn build_context(modules: Vec<PathBuf>, exports: Vec<EngineExport>) -> AnalysisContext {
    let program = build_program(&exports);
    let solver = SnapshotSolver::from_exports(&exports);
    let ctx = AnalysisContext::new(modules, program, Box::new(solver));
    log::info!(
        "Loaded {} function(s) from {} module(s)",
        ctx.functions().len(),
        ctx.modules.len()
    );
    for module in &ctx.modules {
        log::info!("Module {}", module.display());
    }
    ctx
}

/// Merge functions and node renderings. A node without a rendering is only
/// logged; its text reads as empty and extraction degrades to empty fields.
fn build_program(exports: &[EngineExport]) -> Program {
    let mut nodes = HashMap::new();
    for export in exports {
        nodes.extend(export.nodes.iter().map(|(id, text)| (*id, text.clone())));
    }

    let mut functions = Vec::new();
    for export in exports {
        for function in &export.functions {
            let unrendered = function
                .args
                .iter()
                .flatten()
                .copied()
                .filter(|node| !nodes.contains_key(node));
            for node in unrendered {
                log::warn!(
                    "Function '{}' has argument node {} without a rendering",
                    function.signature,
                    node
                );
            }
            functions.push(AnalyzedFunction {
                signature: function.signature.clone(),
                return_node: function.return_node,
                args: function.args.clone(),
            });
        }
    }

    Program::new(functions, nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::test_utils::write_export;
    use rstest::rstest;
    use tempfile::tempdir;

    #[rstest]
    fn test_export_path_appends_suffix() {
        let loader = SnapshotLoader::default();
        assert_eq!(
            loader.export_path_for(Path::new("bench/llvm/foo.ll")),
            PathBuf::from("bench/llvm/foo.ll.pta.json")
        );
    }

    #[rstest]
    fn test_load_single_module() {
        let dir = tempdir().unwrap();
        let module = write_export(dir.path(), "llvm/foo.ll", fixtures::SINGLE_FUNCTION);

        let ctx = SnapshotLoader::default().load(&[module.clone()]).unwrap();
        assert_eq!(ctx.modules, vec![module]);
        assert_eq!(ctx.functions().len(), 1);
        assert_eq!(ctx.functions()[0].signature, "Function: f");
        assert_eq!(ctx.points_to(ctx.functions()[0].return_node).count(), 3);
    }

    #[rstest]
    fn test_load_merges_in_input_order() {
        let dir = tempdir().unwrap();
        let first = write_export(dir.path(), "ab/one.ll", fixtures::SINGLE_FUNCTION);
        let second = write_export(dir.path(), "ab/two.ll", fixtures::MAIN_CALLS_F);

        let ctx = SnapshotLoader::default().load(&[first, second]).unwrap();
        let signatures: Vec<_> = ctx.functions().iter().map(|f| f.signature.as_str()).collect();
        assert_eq!(signatures, vec!["Function: f", "Function: main", "Function: f"]);
        assert_eq!(ctx.call_graph().edge_count(), 1);
    }

    #[rstest]
    fn test_unknown_node_points_to_nothing() {
        let ctx = build_context(vec![], vec![]);
        assert!(ctx.points_to(999).is_empty());
    }

    #[rstest]
    fn test_no_modules_rejected() {
        let result = SnapshotLoader::default().load(&[]);
        assert!(matches!(result, Err(EngineError::NoModules)));
    }

    #[rstest]
    fn test_missing_export_fails() {
        let result = SnapshotLoader::default().load(&[PathBuf::from("/nonexistent/llvm/x.ll")]);
        assert!(matches!(result, Err(EngineError::ExportReadFailed { .. })));
    }

    #[rstest]
    fn test_invalid_json_fails() {
        let result = parse_export("{ not valid json }", Path::new("x.pta.json"));
        assert!(matches!(result, Err(EngineError::ExportParseFailed { .. })));
    }

    #[rstest]
    fn test_unrendered_node_still_loads() {
        let export = parse_export(
            r#"{"functions": [{"signature": "Function: g", "return_node": 1, "args": [2]}],
                "nodes": {"1": "ret"},
                "points_to": {"2": [7]}}"#,
            Path::new("x.pta.json"),
        )
        .unwrap();
        let ctx = build_context(vec![], vec![export]);
        assert_eq!(ctx.functions().len(), 1);
        assert_eq!(ctx.node_text(2), "");
        assert_eq!(ctx.points_to(2).count(), 1);
    }
}
