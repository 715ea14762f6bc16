// src/layout/types.rs

use serde::{Deserialize, Serialize};

/// A single column as parsed from a layout line: the column name plus the
/// half-open `[start, end)` offset range it occupies in a data line.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
pub struct ColumnSpec {
    pub name: String,
    pub start: usize,
    pub end: usize,
}
