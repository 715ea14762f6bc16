pub mod group;
pub mod parse;
pub mod types;
pub mod validate;

pub use group::group_layout_lines;
pub use parse::{parse_column_spec, sorted_column_names, table_columns};
pub use types::ColumnSpec;
pub use validate::{layouts_match, validate_table_layout};
