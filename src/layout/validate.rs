// src/layout/validate.rs

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::layout::parse::without_header;
use crate::reader::read_lines;
use tracing::{debug, warn};

/// Order-insensitive comparison of two layout line sets, header-literal
/// lines ignored on both sides. Sorting and comparing the vectors keeps
/// duplicate lines significant: a line present twice on one side and once
/// on the other is a mismatch, not a silently merged set.
pub fn layouts_match(master: &[String], redundant: &[String], header: &str) -> bool {
    let mut a: Vec<&str> = without_header(master, header).collect();
    let mut b: Vec<&str> = without_header(redundant, header).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Cross-check a table's master-layout group against the redundant
/// `<table>_<layout file>` file next to the data.
///
/// The redundant file restates the master's column specs and exists purely
/// so the two sources can vouch for each other; any disagreement is fatal
/// for the whole run, not just this table.
pub fn validate_table_layout(config: &Config, table: &str, group: &[String]) -> Result<()> {
    let file_lines = read_lines(
        &config.base_dir,
        &config.table_layout_name(table),
        config.resolved_encoding(),
    );

    if !layouts_match(group, &file_lines, &config.layout_header) {
        warn!(table, "redundant layout file disagrees with master group");
        return Err(PipelineError::LayoutMismatch {
            table: table.to_string(),
        });
    }

    debug!(table, "redundant layout matches master group");
    Ok(())
}
