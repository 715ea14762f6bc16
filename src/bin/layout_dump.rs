// src/bin/layout_dump.rs

use flat2sql::layout::{table_columns, ColumnSpec};
use flat2sql::process::load_table_groups;
use flat2sql::Config;
use std::collections::BTreeMap;
use std::env;
use std::fs::File;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1) Base directory from the first CLI argument, optional output file
    //    as the second; without it the YAML goes to stdout
    let dir = env::args()
        .nth(1)
        .expect("Usage: layout_dump <DATA_DIR> [OUT_FILE]");
    let out_file = env::args().nth(2);
    let config = Config::new(dir);

    // 2) Parse every table's column specs from the master layout
    let mut layouts: BTreeMap<String, Vec<ColumnSpec>> = BTreeMap::new();
    for (table, group) in &load_table_groups(&config) {
        let columns = table_columns(table, group, config.field_separator, &config.layout_header)?;
        layouts.insert(table.clone(), columns);
    }

    // 3) Emit everything as YAML, a mapping of table name to column list
    let yaml_string = serde_yaml::to_string(&layouts)?;
    match out_file {
        Some(path) => {
            let mut out = File::create(&path)?;
            out.write_all(yaml_string.as_bytes())?;
            println!("→ wrote {} ({} tables)", path, layouts.len());
        }
        None => print!("{yaml_string}"),
    }
    Ok(())
}
