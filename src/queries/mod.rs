//! Read-only queries against the analysis engine's results.

pub mod points_to;
