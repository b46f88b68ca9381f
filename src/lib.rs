//! pta_report library - points-to analysis report driver
//!
//! Drives an external whole-program points-to analysis engine over a set of
//! compiled modules and renders its results as on-disk reports: per-function
//! points-to set sizes, per-argument metadata, or the recovered call graph.

pub mod cli;
pub mod config;
pub mod engine;
pub mod extract;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod queries;
pub mod reports;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
