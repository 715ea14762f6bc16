// src/layout/group.rs

use std::collections::BTreeMap;
use tracing::debug;

/// Split the master layout's lines into per-table groups.
///
/// Groups are runs of non-empty lines separated by blank lines; the first
/// line of a run names the table, the remaining lines are that table's
/// layout lines in original order (the header line included, to be discarded
/// later). Empty runs from consecutive, leading or trailing separators
/// contribute nothing. A repeated table name extends the earlier group.
///
/// The single pass carries its state explicitly (run under construction plus
/// completed groups); the BTreeMap gives a deterministic table order, which
/// keeps whole-run output byte-stable.
pub fn group_layout_lines(lines: &[String]) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut run: Vec<String> = Vec::new();

    for line in lines {
        if line.is_empty() {
            flush_run(&mut groups, &mut run);
        } else {
            run.push(line.clone());
        }
    }
    flush_run(&mut groups, &mut run);

    debug!(tables = groups.len(), "grouped master layout");
    groups
}

/// Move a completed run into the group map. The run's first line is the
/// table name; a name-only run still registers the table, with no lines.
fn flush_run(groups: &mut BTreeMap<String, Vec<String>>, run: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    let mut drained = std::mem::take(run);
    let table = drained.remove(0);
    groups.entry(table).or_default().extend(drained);
}
