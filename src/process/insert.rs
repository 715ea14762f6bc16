// src/process/insert.rs

use crate::process::extract::ExtractedRow;

/// Prefix shared by every insert of a table, through `VALUES (`. Column
/// names appear in the caller's (alphabetical) order; computing this once
/// per table keeps the per-line work down to the value list.
pub fn base_insert_text(table: &str, sorted_columns: &[String], sep: char) -> String {
    let columns_len: usize = sorted_columns.iter().map(String::len).sum();
    let sep_count = sorted_columns.len().saturating_sub(1);
    // 24 covers the fixed text around the column list
    let mut text = String::with_capacity(24 + table.len() + columns_len + sep_count);

    text.push_str("INSERT INTO ");
    text.push_str(table);
    text.push_str(" (");
    for (i, column) in sorted_columns.iter().enumerate() {
        if i > 0 {
            text.push(sep);
        }
        text.push_str(column);
    }
    text.push_str(") VALUES (");
    text
}

/// Render one complete insert statement. Values follow `sorted_columns`
/// order; a value that is absent from the row or blank becomes the bare
/// `null_token` (no quotes), anything else is emitted verbatim, padding
/// and all. No SQL quoting or escaping is applied.
pub fn format_insert(
    base: &str,
    row: &ExtractedRow,
    sorted_columns: &[String],
    sep: char,
    null_token: &str,
) -> String {
    let mut stmt = String::from(base);
    for (i, column) in sorted_columns.iter().enumerate() {
        if i > 0 {
            stmt.push(sep);
        }
        match row.get(column) {
            Some(value) if !is_blank(value) => stmt.push_str(value),
            _ => stmt.push_str(null_token),
        }
    }
    stmt.push_str(");");
    stmt
}

/// Blank means nothing but characters at or below U+0020, the empty string
/// included. Deliberately not `str::trim`: Unicode trimming would also eat
/// U+00A0, a printable byte in the single-byte charsets this data ships in.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c <= ' ')
}
