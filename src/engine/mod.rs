//! Boundary to the external points-to analysis engine.
//!
//! The solver itself lives outside this crate. What the report pipeline sees is
//! an [`AnalysisContext`] that owns the loaded module set, the program
//! representation (functions and their node ids) and a [`Solver`] answering
//! points-to queries. Report writers only ever borrow the context.

mod call_graph;
mod models;
mod snapshot;

pub use call_graph::{CallEdge, CallGraph, DotCallGraph};
pub use models::{CallEdgeExport, CallGraphExport, CallGraphNodeExport, EngineExport, FunctionExport};
pub use snapshot::{
    DEFAULT_EXPORT_SUFFIX, EngineError, SnapshotLoader, SnapshotSolver, build_context, parse_export, snapshot_context,
};

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// Opaque handle the engine uses for one program value or memory location.
pub type NodeId = u32;

/// The set of abstract locations one value may point to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsToSet {
    nodes: BTreeSet<NodeId>,
}

impl PointsToSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn insert(&mut self, node: NodeId) -> bool {
        self.nodes.insert(node)
    }
}

impl FromIterator<NodeId> for PointsToSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// A function as the engine reports it.
///
/// `args` is `None` when the engine has no registered argument list for the
/// function, which is reported the same way as an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedFunction {
    pub signature: String,
    pub return_node: NodeId,
    pub args: Option<Vec<NodeId>>,
}

impl AnalyzedFunction {
    pub fn arguments(&self) -> &[NodeId] {
        self.args.as_deref().unwrap_or(&[])
    }
}

/// Program representation built from the module set: functions in engine
/// iteration order plus the textual rendering of every node.
#[derive(Debug, Clone, Default)]
pub struct Program {
    functions: Vec<AnalyzedFunction>,
    nodes: HashMap<NodeId, String>,
}

impl Program {
    pub fn new(functions: Vec<AnalyzedFunction>, nodes: HashMap<NodeId, String>) -> Self {
        Self { functions, nodes }
    }

    pub fn functions(&self) -> &[AnalyzedFunction] {
        &self.functions
    }

    /// Textual rendering of a node, or an empty string for unknown ids.
    pub fn node_text(&self, node: NodeId) -> &str {
        self.nodes.get(&node).map(String::as_str).unwrap_or("")
    }
}

/// Points-to queries against a solved constraint graph.
pub trait Solver {
    /// Points-to set of `node`. Nodes the solver knows nothing about point to
    /// nothing.
    fn points_to(&self, node: NodeId) -> &PointsToSet;

    /// Call graph recovered while solving.
    fn call_graph(&self) -> &dyn CallGraph;
}

/// Everything the engine produced for one run.
pub struct AnalysisContext {
    pub modules: Vec<PathBuf>,
    pub program: Program,
    pub solver: Box<dyn Solver>,
}

impl AnalysisContext {
    pub fn new(modules: Vec<PathBuf>, program: Program, solver: Box<dyn Solver>) -> Self {
        Self {
            modules,
            program,
            solver,
        }
    }

    pub fn functions(&self) -> &[AnalyzedFunction] {
        self.program.functions()
    }

    pub fn points_to(&self, node: NodeId) -> &PointsToSet {
        self.solver.points_to(node)
    }

    pub fn node_text(&self, node: NodeId) -> &str {
        self.program.node_text(node)
    }

    pub fn call_graph(&self) -> &dyn CallGraph {
        self.solver.call_graph()
    }
}
