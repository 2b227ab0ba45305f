// src/process/mod.rs
use serde::Serialize;

pub mod split;

pub use split::split_csv;

/// Rows of raw string fields, exactly as split out of the document.
///
/// Row widths are not checked and nothing is trimmed, so a CRLF document
/// keeps its `\r` on the last field of each row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedTable {
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Field count of the widest row, 0 for a table with no rows.
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl From<ParsedTable> for Vec<Vec<String>> {
    fn from(table: ParsedTable) -> Self {
        table.rows
    }
}
