// src/layout/parse.rs

use crate::error::{PipelineError, Result};
use crate::layout::types::ColumnSpec;

/// Iterate layout lines with every header-literal line removed. The header
/// is constant text, so it is dropped by equality wherever it appears:
/// master groups always carry one, redundant per-table files may or may not.
pub fn without_header<'a>(lines: &'a [String], header: &'a str) -> impl Iterator<Item = &'a str> {
    lines
        .iter()
        .map(String::as_str)
        .filter(move |line| *line != header)
}

/// Parse one column-spec line `name<SEP>_<SEP>start<SEP>end`.
///
/// Field 0 is the column name and fields 2 and 3 the offsets; field 1, like
/// anything past field 3 (the historical format carries a trailing type
/// field), is metadata with no meaning here. Too few fields, a non-numeric
/// offset or `end < start` are fatal; `start == end` is allowed and slices
/// the empty string.
pub fn parse_column_spec(table: &str, line: &str, sep: char) -> Result<ColumnSpec> {
    let fields: Vec<&str> = line.split(sep).collect();
    if fields.len() < 4 {
        return Err(malformed(
            table,
            line,
            format!(
                "expected at least 4 `{}`-separated fields, found {}",
                sep,
                fields.len()
            ),
        ));
    }

    let start = parse_offset(table, line, fields[2], "start")?;
    let end = parse_offset(table, line, fields[3], "end")?;
    if end < start {
        return Err(malformed(
            table,
            line,
            format!("end offset {} precedes start offset {}", end, start),
        ));
    }

    Ok(ColumnSpec {
        name: fields[0].to_string(),
        start,
        end,
    })
}

/// Parse a table's whole layout group (header removed) into column specs,
/// preserving the group's original column order.
pub fn table_columns(
    table: &str,
    group: &[String],
    sep: char,
    header: &str,
) -> Result<Vec<ColumnSpec>> {
    without_header(group, header)
        .map(|line| parse_column_spec(table, line, sep))
        .collect()
}

/// Alphabetically sorted column names: the order used for the insert
/// column list, independent of the layout's original order.
pub fn sorted_column_names(columns: &[ColumnSpec]) -> Vec<String> {
    let mut names: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
    names.sort();
    names
}

fn parse_offset(table: &str, line: &str, raw: &str, which: &str) -> Result<usize> {
    raw.parse::<usize>().map_err(|_| {
        malformed(
            table,
            line,
            format!("{} offset `{}` is not a non-negative integer", which, raw),
        )
    })
}

fn malformed(table: &str, line: &str, reason: String) -> PipelineError {
    PipelineError::MalformedSpec {
        table: table.to_string(),
        line: line.to_string(),
        reason,
    }
}
