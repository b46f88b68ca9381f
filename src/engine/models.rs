//! JSON structures for engine export documents.
//!
//! These types deserialize the solved state the analysis engine exports for
//! one input module: functions with their return/argument nodes, the textual
//! rendering of each node, points-to sets and the recovered call graph.

use serde::Deserialize;
use std::collections::HashMap;

use super::NodeId;

#[derive(Debug, Deserialize)]
pub struct EngineExport {
    #[serde(default)]
    pub functions: Vec<FunctionExport>,
    #[serde(default)]
    pub nodes: HashMap<NodeId, String>,
    #[serde(default)]
    pub points_to: HashMap<NodeId, Vec<NodeId>>,
    #[serde(default)]
    pub call_graph: CallGraphExport,
}

#[derive(Debug, Deserialize)]
pub struct FunctionExport {
    pub signature: String,
    pub return_node: NodeId,
    /// Absent when the engine has no argument list registered for the function
    #[serde(default)]
    pub args: Option<Vec<NodeId>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CallGraphExport {
    #[serde(default)]
    pub nodes: Vec<CallGraphNodeExport>,
    #[serde(default)]
    pub edges: Vec<CallEdgeExport>,
}

#[derive(Debug, Deserialize)]
pub struct CallGraphNodeExport {
    pub id: u32,
    pub function: String,
}

#[derive(Debug, Deserialize)]
pub struct CallEdgeExport {
    pub caller: u32,
    pub callee: u32,
    #[serde(default)]
    pub call_site: Option<String>,
}
