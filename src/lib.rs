// src/lib.rs

//! Fixed-width flat files to SQL insert scripts, driven by layout files.
//!
//! A run reads one master layout describing every table's column offsets,
//! cross-checks each table against its redundant per-table layout file,
//! slices the table's fixed-width data lines by those offsets and renders
//! one `INSERT` statement per line. See [`process::generate_inserts`] for
//! the whole pipeline.

pub mod config;
pub mod error;
pub mod layout;
pub mod process;
pub mod reader;

pub use config::Config;
pub use error::{PipelineError, Result};
pub use process::{generate_inserts, generate_inserts_parallel};
