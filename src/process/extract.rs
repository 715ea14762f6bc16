// src/process/extract.rs

use crate::error::{PipelineError, Result};
use crate::layout::ColumnSpec;
use std::collections::HashMap;

/// One data line's column values, keyed by column name. Built per line and
/// discarded as soon as its insert statement has been rendered.
pub type ExtractedRow = HashMap<String, String>;

/// Slice every column of one data line.
///
/// Offsets address character positions of the decoded line, which coincide
/// with byte positions in the single-byte source encoding; slicing walks the
/// line's char boundaries so decoded multi-byte text is never split mid
/// character. A column whose `end` lies past the end of the line is a fatal
/// error; values are never silently truncated. `line_no` is 1-based and
/// only used for error context.
///
/// `columns` must come from `layout::parse`, which guarantees
/// `start <= end` for every column.
pub fn extract_row(
    table: &str,
    line_no: usize,
    line: &str,
    columns: &[ColumnSpec],
) -> Result<ExtractedRow> {
    let bounds = char_boundaries(line);
    let char_len = bounds.len() - 1;

    let mut row = ExtractedRow::with_capacity(columns.len());
    for col in columns {
        if col.end > char_len {
            return Err(PipelineError::OutOfBounds {
                table: table.to_string(),
                line_no,
                column: col.name.clone(),
                start: col.start,
                end: col.end,
                len: char_len,
            });
        }
        let value = line[bounds[col.start]..bounds[col.end]].to_string();
        row.insert(col.name.clone(), value);
    }
    Ok(row)
}

/// Extract every line of a table's data file. Row order equals file order.
pub fn extract_rows(
    table: &str,
    data_lines: &[String],
    columns: &[ColumnSpec],
) -> Result<Vec<ExtractedRow>> {
    data_lines
        .iter()
        .enumerate()
        .map(|(idx, line)| extract_row(table, idx + 1, line, columns))
        .collect()
}

/// Byte index of every char boundary in `line`, end-of-line included, so
/// column `i..j` maps to the byte range `bounds[i]..bounds[j]` in one pass.
fn char_boundaries(line: &str) -> Vec<usize> {
    let mut bounds: Vec<usize> = line.char_indices().map(|(i, _)| i).collect();
    bounds.push(line.len());
    bounds
}
