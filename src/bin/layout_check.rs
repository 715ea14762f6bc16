// src/bin/layout_check.rs

use anyhow::Result;
use flat2sql::layout::validate_table_layout;
use flat2sql::process::load_table_groups;
use flat2sql::reader::read_lines;
use flat2sql::Config;
use std::env;

fn main() -> Result<()> {
    // 1) Base directory from the first CLI argument
    let dir = env::args().nth(1).expect("Usage: layout_check <DATA_DIR>");
    let config = Config::new(dir);

    // 2) Group the master layout into per-table blocks
    let tables = load_table_groups(&config);
    if tables.is_empty() {
        return Err(anyhow::anyhow!(
            "no tables found in '{}'",
            config.base_dir.join(&config.layout_file_name).display()
        ));
    }

    // 3) Validate every table against its redundant layout file and count
    //    its data lines while we're there
    let mut mismatches = 0;
    println!("{: <30} {:>10} {:>12}", "Table", "Status", "Data lines");
    println!("{:-<54}", "");
    for (table, group) in &tables {
        let data_lines = read_lines(
            &config.base_dir,
            &config.table_data_name(table),
            config.resolved_encoding(),
        );
        let status = match validate_table_layout(&config, table, group) {
            Ok(()) => "ok",
            Err(_) => {
                mismatches += 1;
                "MISMATCH"
            }
        };
        println!("{: <30} {:>10} {:>12}", table, status, data_lines.len());
    }

    // 4) Fail the process when any table disagrees with the master
    if mismatches > 0 {
        return Err(anyhow::anyhow!(
            "{} of {} tables failed layout validation",
            mismatches,
            tables.len()
        ));
    }
    println!("\nall {} tables consistent", tables.len());
    Ok(())
}
