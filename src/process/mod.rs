// src/process/mod.rs
use crate::config::Config;
use crate::error::Result;
use crate::layout::{group_layout_lines, sorted_column_names, table_columns, validate_table_layout};
use crate::reader::read_lines;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{info, instrument};

pub mod extract;
pub mod insert;

pub use extract::{extract_row, extract_rows, ExtractedRow};
pub use insert::{base_insert_text, format_insert, is_blank};

/// Read the master layout and group it into per-table spec blocks. An
/// unreadable master file degrades to an empty map, so the run produces
/// nothing rather than failing.
pub fn load_table_groups(config: &Config) -> BTreeMap<String, Vec<String>> {
    let master = read_lines(
        &config.base_dir,
        &config.layout_file_name,
        config.resolved_encoding(),
    );
    group_layout_lines(&master)
}

/// Run the full per-table pipeline: validate the redundant layout, parse
/// the specs, then slice and render every data line. Output order equals
/// the data file's line order.
#[instrument(level = "info", skip(config, group))]
pub fn process_table(config: &Config, table: &str, group: &[String]) -> Result<Vec<String>> {
    // 1) prove the per-table layout file agrees with the master group
    validate_table_layout(config, table, group)?;

    // 2) parse the specs and fix the alphabetical column order once
    let columns = table_columns(table, group, config.field_separator, &config.layout_header)?;
    let sorted = sorted_column_names(&columns);
    let base = base_insert_text(table, &sorted, config.value_separator);

    // 3) slice and render each data line; a missing data file is just zero lines
    let data_lines = read_lines(
        &config.base_dir,
        &config.table_data_name(table),
        config.resolved_encoding(),
    );

    let mut inserts = Vec::with_capacity(data_lines.len());
    for (idx, line) in data_lines.iter().enumerate() {
        let row = extract_row(table, idx + 1, line, &columns)?;
        inserts.push(format_insert(
            &base,
            &row,
            &sorted,
            config.value_separator,
            &config.null_token,
        ));
    }

    info!(table, rows = inserts.len(), "table rendered");
    Ok(inserts)
}

/// Generate the insert statements for every table in the master layout,
/// one table at a time, in the map's (alphabetical) table order.
#[instrument(level = "info", skip(config), fields(base_dir = %config.base_dir.display()))]
pub fn generate_inserts(config: &Config) -> Result<Vec<String>> {
    let start = Instant::now();
    let tables = load_table_groups(config);

    let mut inserts = Vec::new();
    for (table, group) in &tables {
        inserts.extend(process_table(config, table, group)?);
    }

    info!(
        tables = tables.len(),
        inserts = inserts.len(),
        elapsed = ?start.elapsed(),
        "insert generation complete"
    );
    Ok(inserts)
}

/// Same output as [`generate_inserts`], with independent tables fanned out
/// across the rayon pool. Collection preserves the iteration order, so the
/// concatenated result is byte-identical to the sequential run.
#[instrument(level = "info", skip(config), fields(base_dir = %config.base_dir.display()))]
pub fn generate_inserts_parallel(config: &Config) -> Result<Vec<String>> {
    let start = Instant::now();
    let tables: Vec<(String, Vec<String>)> = load_table_groups(config).into_iter().collect();

    let per_table = tables
        .par_iter()
        .map(|(table, group)| process_table(config, table, group))
        .collect::<Result<Vec<_>>>()?;

    let inserts: Vec<String> = per_table.into_iter().flatten().collect();
    info!(
        tables = tables.len(),
        inserts = inserts.len(),
        elapsed = ?start.elapsed(),
        "insert generation complete"
    );
    Ok(inserts)
}
