//! Shared types for report records.

mod records;

pub use records::{ArgumentMetadata, ArgumentRecord, FunctionRecord, ReportDocument};
