//! Typed errors for the layout/extraction pipeline.

use thiserror::Error;

/// Fatal conditions that abort a whole run. I/O problems are deliberately
/// absent: the line reader degrades missing or unreadable files to empty
/// line sequences instead of failing (see `crate::reader`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The redundant per-table layout file disagrees with the master layout
    /// group for this table.
    #[error("layout mismatch for table `{table}`: master and per-table layout files disagree")]
    LayoutMismatch { table: String },

    /// A column-spec line could not be parsed: too few fields, a non-numeric
    /// offset, or an end offset before the start offset.
    #[error("malformed column spec in table `{table}`: {reason} (line: `{line}`)")]
    MalformedSpec {
        table: String,
        line: String,
        reason: String,
    },

    /// A column's offset range extends past the end of a data line. Never
    /// degraded to a truncated value.
    #[error(
        "column `{column}` of table `{table}` spans {start}..{end} but data line {line_no} has only {len} characters"
    )]
    OutOfBounds {
        table: String,
        line_no: usize,
        column: String,
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Convenience alias used throughout the pipeline modules.
pub type Result<T> = std::result::Result<T, PipelineError>;
