//! Recovered call graph and its Graphviz writer.
//!
//! The engine's call graph serializes itself; the report pipeline only hands it
//! a destination path. Like the engine's own graph printer, the `.dot`
//! extension is appended to whatever path the caller resolved.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::models::CallGraphExport;

/// A call graph that can write itself to disk.
pub trait CallGraph {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Write the graph next to `path` and return the file actually written.
    fn dump(&self, path: &Path) -> io::Result<PathBuf>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallEdge {
    pub caller: u32,
    pub callee: u32,
    pub call_site: Option<String>,
}

/// Call graph rendered as a Graphviz `digraph`.
#[derive(Debug, Clone, Default)]
pub struct DotCallGraph {
    nodes: BTreeMap<u32, String>,
    edges: Vec<CallEdge>,
}

impl DotCallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one module's exported call graph. Node ids are global across the
    /// module set, so a later export redefining an id replaces its name.
    pub fn extend_from_export(&mut self, export: &CallGraphExport) {
        for node in &export.nodes {
            self.nodes.insert(node.id, node.function.clone());
        }
        self.edges.extend(export.edges.iter().map(|e| CallEdge {
            caller: e.caller,
            callee: e.callee,
            call_site: e.call_site.clone(),
        }));
    }

    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph \"Call Graph\" {{")?;
        writeln!(dot, "\tlabel=\"Call Graph\";")?;
        writeln!(dot)?;

        for (id, function) in &self.nodes {
            writeln!(dot, "\tNode{} [shape=box,label=\"{}\"];", id, escape_label(function))?;
        }

        for edge in &self.edges {
            match &edge.call_site {
                Some(site) => writeln!(
                    dot,
                    "\tNode{} -> Node{} [label=\"{}\"];",
                    edge.caller,
                    edge.callee,
                    escape_label(site)
                )?,
                None => writeln!(dot, "\tNode{} -> Node{};", edge.caller, edge.callee)?,
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

impl CallGraph for DotCallGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn dump(&self, path: &Path) -> io::Result<PathBuf> {
        let mut target = path.as_os_str().to_owned();
        target.push(".dot");
        let target = PathBuf::from(target);

        let dot = self
            .to_dot()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        fs::write(&target, dot)?;
        Ok(target)
    }
}

fn escape_label(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
