//! Shared test utilities for builder, report and engine tests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::snapshot_context;
use crate::engine::AnalysisContext;
use crate::types::{ArgumentMetadata, ArgumentRecord, FunctionRecord, ReportDocument};

/// Build an analysis context from a single export document.
pub fn context_from_json(content: &str) -> AnalysisContext {
    snapshot_context(&[content]).expect("Export fixture should load")
}

/// Write `content` as the engine export of module `module` under `dir`.
///
/// Returns the module path (not the export path), creating parent
/// directories as needed.
pub fn write_export(dir: &Path, module: &str, content: &str) -> PathBuf {
    let module_path = dir.join(module);
    if let Some(parent) = module_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create module dir");
    }
    let mut export = module_path.as_os_str().to_owned();
    export.push(".pta.json");
    fs::write(PathBuf::from(export), content).expect("Failed to write export");
    module_path
}

/// Points-to record for `f` with return size 3 and argument sizes {1, 0}.
pub fn points_to_record() -> FunctionRecord {
    let mut record = FunctionRecord::new("f", 3);
    record.arguments = vec![ArgumentRecord::new(0).with_size(1), ArgumentRecord::new(1).with_size(0)];
    record
}

/// Comparison record for `f` with one fully extracted and one partial argument.
pub fn comparison_record() -> FunctionRecord {
    let mut record = FunctionRecord::new("f", 3);
    record.arguments = vec![
        ArgumentRecord::new(0).with_metadata(ArgumentMetadata {
            ty: "i32*".to_string(),
            name: "x".to_string(),
            file: "/a/b.c".to_string(),
        }),
        ArgumentRecord::new(1).with_metadata(ArgumentMetadata {
            ty: "i8*".to_string(),
            name: "buf".to_string(),
            file: String::new(),
        }),
    ];
    record
}

pub fn document(functions: Vec<FunctionRecord>) -> ReportDocument {
    ReportDocument { functions }
}
