// src/reader.rs

use encoding_rs::Encoding;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Read `file_name` under `dir` and return its lines decoded with `encoding`.
///
/// A missing or unreadable file yields an empty vector rather than an error:
/// downstream stages then see an empty table (or an empty data file) and a
/// warning is emitted as the only trace of the problem. Callers that need
/// hard failures must check for emptiness themselves.
pub fn read_lines(dir: &Path, file_name: &str, encoding: &'static Encoding) -> Vec<String> {
    let path = dir.join(file_name);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), %err, "unreadable input degraded to empty line list");
            return Vec::new();
        }
    };

    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(
            path = %path.display(),
            encoding = encoding.name(),
            "input contained byte sequences invalid for the configured encoding"
        );
    }

    text.lines().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn latin1() -> &'static Encoding {
        Encoding::for_label(b"iso-8859-1").unwrap()
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let lines = read_lines(dir.path(), "nope.txt", latin1());
        assert!(lines.is_empty());
    }

    #[test]
    fn decodes_single_byte_accents() {
        let dir = tempdir().unwrap();
        // "São|1|0|3" in ISO-8859-1: 0xE3 is ã
        fs::write(dir.path().join("layout.txt"), b"S\xe3o|1|0|3\n").unwrap();
        let lines = read_lines(dir.path(), "layout.txt", latin1());
        assert_eq!(lines, vec!["São|1|0|3".to_string()]);
    }

    #[test]
    fn crlf_and_trailing_newline_produce_clean_lines() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.txt"), b"one\r\ntwo\n\nfour\n").unwrap();
        let lines = read_lines(dir.path(), "data.txt", latin1());
        assert_eq!(lines, vec!["one", "two", "", "four"]);
    }
}
