//! Best-effort field extraction from the engine's textual node renderings.
//!
//! The engine only hands out free text for functions and arguments. Every
//! extractor here is independent and returns an empty string when the text
//! does not have the expected shape; a miss is never an error.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `Function: <identifier>`; LLVM identifiers may contain `.` and `$`.
static FUNCTION_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Function:\s*([A-Za-z_.$][A-Za-z0-9_.$]*)").unwrap()
});

const FILE_KEY: &str = "\"file\":";

/// Value sigils the engine prefixes to local and global names.
const SIGILS: [char; 2] = ['%', '@'];

/// Bare function name from a signature rendering such as `Function: foo(...)`.
pub fn function_name(text: &str) -> String {
    FUNCTION_NAME_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Declared type of an argument rendered as `<type> %<name> ...`.
pub fn argument_type(text: &str) -> String {
    text.split_whitespace().next().unwrap_or("").to_string()
}

/// Argument name with its leading value sigil removed.
pub fn argument_name(text: &str) -> String {
    let token = text.split_whitespace().nth(1).unwrap_or("");
    token
        .strip_prefix(|c: char| SIGILS.contains(&c))
        .unwrap_or(token)
        .to_string()
}

/// Source file from an embedded `"file": "<path>"` annotation.
pub fn source_file(text: &str) -> String {
    let Some(start) = text.find(FILE_KEY) else {
        return String::new();
    };
    let rest = text[start + FILE_KEY.len()..].trim_start();
    let Some(quoted) = rest.strip_prefix('"') else {
        return String::new();
    };
    match quoted.find('"') {
        Some(end) => quoted[..end].to_string(),
        None => String::new(),
    }
}
