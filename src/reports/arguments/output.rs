//! Encodings for the arguments-comparison report.

use super::execute::ComparisonReport;
use crate::output::{Encodable, indent, quote, separator};
use crate::types::{ArgumentMetadata, ArgumentRecord, FunctionRecord};

fn metadata(record: &ArgumentRecord) -> ArgumentMetadata {
    record.metadata.clone().unwrap_or_default()
}

fn structured_function(lines: &mut Vec<String>, record: &FunctionRecord, sep: &str) {
    if record.arguments.is_empty() {
        lines.push(format!("{}{}: []{}", indent(1), quote(&record.name), sep));
        return;
    }

    lines.push(format!("{}{}: [", indent(1), quote(&record.name)));
    let count = record.arguments.len();
    for (i, arg) in record.arguments.iter().enumerate() {
        let meta = metadata(arg);
        lines.push(format!(
            "{}{{\"type\": {}, \"name\": {}, \"file\": {}}}{}",
            indent(2),
            quote(&meta.ty),
            quote(&meta.name),
            quote(&meta.file),
            separator(i, count)
        ));
    }
    lines.push(format!("{}]{}", indent(1), sep));
}

impl Encodable for ComparisonReport {
    fn to_structured(&self) -> String {
        if self.document.is_empty() {
            return "{}\n".to_string();
        }

        let mut lines = vec!["{".to_string()];
        let count = self.document.len();
        for (i, record) in self.document.functions.iter().enumerate() {
            structured_function(&mut lines, record, separator(i, count));
        }
        lines.push("}".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
