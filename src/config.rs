// src/config.rs

use anyhow::Context;
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime options for one batch run. Every knob of the file format lives
/// here so nothing is baked into the pipeline logic; the base directory is
/// the only value with no sensible default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the master layout, per-table layouts and data files.
    pub base_dir: PathBuf,
    /// Field separator inside layout lines (`name<SEP>_<SEP>start<SEP>end`).
    pub field_separator: char,
    /// Separator between columns and between values in generated inserts.
    pub value_separator: char,
    /// Literal emitted for absent or blank column values, unquoted.
    pub null_token: String,
    /// File name of the master layout; per-table layouts are named
    /// `<table>_<layout_file_name>`.
    pub layout_file_name: String,
    /// Exact text of the layout header line, discarded wherever it appears.
    pub layout_header: String,
    /// Extension appended to a table name to locate its data file.
    pub data_extension: String,
    /// Label of the single-byte charset the input files are stored in,
    /// resolved through the WHATWG Encoding Standard registry.
    pub encoding: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_dir: PathBuf::from("."),
            field_separator: '|',
            value_separator: ',',
            null_token: "NULL".to_string(),
            layout_file_name: "layout.txt".to_string(),
            layout_header: "name|size|start|end|type".to_string(),
            data_extension: ".txt".to_string(),
            encoding: "iso-8859-1".to_string(),
        }
    }
}

impl Config {
    /// Config with defaults rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Config {
            base_dir: base_dir.into(),
            ..Config::default()
        }
    }

    /// Load overrides from a YAML file; absent keys keep their defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let cfg: Config = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(cfg)
    }

    /// Resolve the configured encoding label. Unknown labels fall back to
    /// windows-1252, which is also what the registry resolves the default
    /// `iso-8859-1` label to.
    pub fn resolved_encoding(&self) -> &'static Encoding {
        Encoding::for_label(self.encoding.as_bytes()).unwrap_or(encoding_rs::WINDOWS_1252)
    }

    /// File name of the redundant layout file for `table`. File names fold
    /// the table name to lower case; generated SQL keeps it verbatim.
    pub fn table_layout_name(&self, table: &str) -> String {
        format!("{}_{}", table.to_lowercase(), self.layout_file_name)
    }

    /// File name of the fixed-width data file for `table`.
    pub fn table_data_name(&self, table: &str) -> String {
        format!("{}{}", table.to_lowercase(), self.data_extension)
    }
}
