//! Encodings for the points-to report.

use super::execute::PointsToReport;
use crate::output::{Encodable, indent, quote, separator};
use crate::types::FunctionRecord;

fn push_members(lines: &mut Vec<String>, members: Option<&Vec<String>>) {
    for member in members.into_iter().flatten() {
        lines.push(format!("\t{}", member));
    }
}

fn flat_function(lines: &mut Vec<String>, record: &FunctionRecord) {
    lines.push(format!(
        "return value pts of function {} -> size: {}",
        record.name, record.return_set_size
    ));
    push_members(lines, record.return_members.as_ref());

    for arg in &record.arguments {
        lines.push(format!(
            "arg {} pts of function -> size: {}",
            arg.index,
            arg.points_to_set_size.unwrap_or(0)
        ));
        push_members(lines, arg.members.as_ref());
    }
    lines.push(String::new());
}

fn structured_function(lines: &mut Vec<String>, record: &FunctionRecord, sep: &str) {
    lines.push(format!("{}{}: {{", indent(1), quote(&record.name)));
    lines.push(format!(
        "{}\"result_set_size\": {},",
        indent(2),
        quote(&record.return_set_size.to_string())
    ));

    if record.arguments.is_empty() {
        lines.push(format!("{}\"arguments_set_sizes\": {{}},", indent(2)));
    } else {
        lines.push(format!("{}\"arguments_set_sizes\": {{", indent(2)));
        let count = record.arguments.len();
        for (i, arg) in record.arguments.iter().enumerate() {
            lines.push(format!(
                "{}{}: {}{}",
                indent(3),
                quote(&format!("arg_{}", arg.index)),
                quote(&arg.points_to_set_size.unwrap_or(0).to_string()),
                separator(i, count)
            ));
        }
        lines.push(format!("{}}},", indent(2)));
    }

    lines.push(format!(
        "{}\"num_arguments\": {}",
        indent(2),
        quote(&record.arguments.len().to_string())
    ));
    lines.push(format!("{}}}{}", indent(1), sep));
}

impl Encodable for PointsToReport {
    fn to_flat(&self) -> String {
        let mut lines = Vec::new();
        for record in &self.document.functions {
            flat_function(&mut lines, record);
        }
        if lines.is_empty() {
            return String::new();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

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
