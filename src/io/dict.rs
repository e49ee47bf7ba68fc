//! Tab-delimited dictionary records.
//!
//! One record per line, `id<TAB>value`. Values are escaped so raw tokens
//! containing the delimiters cannot corrupt the format:
//!
//! | raw | escaped |
//! |---|---|
//! | `\` | `\\` |
//! | TAB | `\t` |
//! | LF  | `\n` |
//! | CR  | `\r` |
//!
//! Readers reverse the mapping and reject any other escape sequence.

use std::fs;
use std::path::Path;

use crate::error::{Result, VocabError};

/// One parsed dictionary record, with its 1-based source line for error
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub id: u32,
    pub value: String,
}

/// Escape a raw value for storage.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

/// Reverse [`escape`]; `None` on an invalid escape sequence.
pub fn unescape(value: &str) -> Option<String> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            _ => return None,
        }
    }
    Some(out)
}

/// Write `(id, value)` records to `path`, one per line.
pub fn write_records(path: &Path, records: impl Iterator<Item = (u32, String)>) -> Result<()> {
    let body = records
        .map(|(id, value)| format!("{id}\t{}", escape(&value)))
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(path, body).map_err(|e| VocabError::io(format!("writing {}", path.display()), e))
}

/// Read every record from `path`.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path)
        .map_err(|e| VocabError::io(format!("reading {}", path.display()), e))?;
    if content.is_empty() {
        return Ok(Vec::new());
    }
    let mut records = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let (id_str, value_str) = raw
            .split_once('\t')
            .ok_or_else(|| VocabError::parse(path, line, "expected `id<TAB>value`"))?;
        let id: u32 = id_str
            .parse()
            .map_err(|_| VocabError::parse(path, line, format!("invalid id {id_str:?}")))?;
        let value = unescape(value_str)
            .ok_or_else(|| VocabError::parse(path, line, "invalid escape sequence"))?;
        records.push(Record { line, id, value });
    }
    Ok(records)
}
