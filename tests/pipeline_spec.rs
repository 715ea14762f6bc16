use flat2sql::{generate_inserts, generate_inserts_parallel, Config, PipelineError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "HEADER_LITERAL";

fn config_for(dir: &Path) -> Config {
    let mut config = Config::new(dir);
    config.layout_header = HEADER.to_string();
    config
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// One table, two columns, one data line: the canonical happy path.
fn users_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "layout.txt",
        "USERS\nID|_|0|2\nNAME|_|2|10\nHEADER_LITERAL\n",
    );
    write(dir.path(), "users_layout.txt", "NAME|_|2|10\nID|_|0|2\n");
    write(dir.path(), "users.txt", "01John    \n");
    dir
}

/// Three tables with 2, 0 and 3 data lines.
fn multi_table_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "layout.txt",
        "ALPHA\nA|_|0|1\nHEADER_LITERAL\n\nBETA\nB|_|0|1\nHEADER_LITERAL\n\nGAMMA\nG|_|0|1\nHEADER_LITERAL\n",
    );
    write(dir.path(), "alpha_layout.txt", "A|_|0|1\n");
    write(dir.path(), "beta_layout.txt", "B|_|0|1\n");
    write(dir.path(), "gamma_layout.txt", "G|_|0|1\n");
    write(dir.path(), "alpha.txt", "x\ny\n");
    write(dir.path(), "beta.txt", "");
    write(dir.path(), "gamma.txt", "1\n2\n3\n");
    dir
}

#[test]
fn worked_example_produces_the_canonical_insert() {
    let dir = users_fixture();
    let inserts = generate_inserts(&config_for(dir.path())).unwrap();
    assert_eq!(
        inserts,
        vec!["INSERT INTO USERS (ID,NAME) VALUES (01,John    );"]
    );
}

#[test]
fn missing_spec_line_in_redundant_layout_aborts_naming_the_table() {
    let dir = users_fixture();
    write(dir.path(), "users_layout.txt", "ID|_|0|2\n");

    let err = generate_inserts(&config_for(dir.path())).unwrap_err();
    assert_eq!(
        err,
        PipelineError::LayoutMismatch {
            table: "USERS".to_string()
        }
    );
}

#[test]
fn any_single_spec_difference_fails_validation() {
    let variants = [
        "ID|_|0|2\n",                           // NAME removed
        "ID|_|0|2\nNAME|_|2|10\nAGE|_|10|12\n", // AGE added
        "ID|_|0|3\nNAME|_|2|10\n",              // ID altered
    ];
    for redundant in variants {
        let dir = users_fixture();
        write(dir.path(), "users_layout.txt", redundant);
        let err = generate_inserts(&config_for(dir.path())).unwrap_err();
        assert_eq!(
            err,
            PipelineError::LayoutMismatch {
                table: "USERS".to_string()
            },
            "redundant layout {:?} should not validate",
            redundant
        );
    }
}

#[test]
fn permuting_the_redundant_layout_is_harmless() {
    let dir = users_fixture();
    // same two spec lines, opposite order from the master group
    write(dir.path(), "users_layout.txt", "ID|_|0|2\nNAME|_|2|10\n");
    assert_eq!(generate_inserts(&config_for(dir.path())).unwrap().len(), 1);
}

#[test]
fn total_inserts_equal_total_data_lines() {
    let dir = multi_table_fixture();
    let inserts = generate_inserts(&config_for(dir.path())).unwrap();
    assert_eq!(inserts.len(), 2 + 0 + 3);
}

#[test]
fn column_list_and_values_follow_alphabetical_order() {
    let dir = TempDir::new().unwrap();
    // layout order Z, A, M; data line is "zam" so each value names its column
    write(
        dir.path(),
        "layout.txt",
        "ZED\nZZ|_|0|1\nAA|_|1|2\nMM|_|2|3\nHEADER_LITERAL\n",
    );
    write(dir.path(), "zed_layout.txt", "ZZ|_|0|1\nAA|_|1|2\nMM|_|2|3\n");
    write(dir.path(), "zed.txt", "zam\n");

    let inserts = generate_inserts(&config_for(dir.path())).unwrap();
    assert_eq!(inserts, vec!["INSERT INTO ZED (AA,MM,ZZ) VALUES (a,m,z);"]);
}

#[test]
fn blank_values_become_null_but_padding_survives() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "layout.txt",
        "PAD\nA|_|0|3\nB|_|3|6\nC|_|6|9\nHEADER_LITERAL\n",
    );
    write(dir.path(), "pad_layout.txt", "A|_|0|3\nB|_|3|6\nC|_|6|9\n");
    write(dir.path(), "pad.txt", " x    123\n");

    let inserts = generate_inserts(&config_for(dir.path())).unwrap();
    assert_eq!(inserts, vec!["INSERT INTO PAD (A,B,C) VALUES ( x ,NULL,123);"]);
}

#[test]
fn reruns_and_parallel_runs_are_byte_identical() {
    let dir = multi_table_fixture();
    let config = config_for(dir.path());

    let first = generate_inserts(&config).unwrap();
    let second = generate_inserts(&config).unwrap();
    let parallel = generate_inserts_parallel(&config).unwrap();
    assert_eq!(first, second, "sequential rerun must not change output");
    assert_eq!(first, parallel, "parallel run must match sequential output");
}

#[test]
fn missing_master_layout_degrades_to_an_empty_run() {
    let dir = TempDir::new().unwrap();
    assert!(generate_inserts(&config_for(dir.path())).unwrap().is_empty());
}

#[test]
fn missing_data_file_degrades_to_zero_rows() {
    let dir = multi_table_fixture();
    fs::remove_file(dir.path().join("gamma.txt")).unwrap();
    let inserts = generate_inserts(&config_for(dir.path())).unwrap();
    assert_eq!(inserts.len(), 2);
}

#[test]
fn missing_redundant_layout_reads_empty_and_fails_validation() {
    let dir = users_fixture();
    fs::remove_file(dir.path().join("users_layout.txt")).unwrap();
    let err = generate_inserts(&config_for(dir.path())).unwrap_err();
    assert_eq!(
        err,
        PipelineError::LayoutMismatch {
            table: "USERS".to_string()
        }
    );
}

#[test]
fn latin1_data_decodes_and_slices_by_character() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "layout.txt",
        "CITIES\nNAME|_|0|8\nUF|_|8|10\nHEADER_LITERAL\n",
    );
    write(dir.path(), "cities_layout.txt", "NAME|_|0|8\nUF|_|8|10\n");
    // "São JoãoRJ" in ISO-8859-1: ã is the single byte 0xE3
    fs::write(dir.path().join("cities.txt"), b"S\xE3o Jo\xE3oRJ\n").unwrap();

    let inserts = generate_inserts(&config_for(dir.path())).unwrap();
    assert_eq!(
        inserts,
        vec!["INSERT INTO CITIES (NAME,UF) VALUES (S\u{e3}o Jo\u{e3}o,RJ);"]
    );
}

#[test]
fn crlf_inputs_behave_like_lf_inputs() {
    let dir = users_fixture();
    write(
        dir.path(),
        "layout.txt",
        "USERS\r\nID|_|0|2\r\nNAME|_|2|10\r\nHEADER_LITERAL\r\n",
    );
    write(dir.path(), "users_layout.txt", "NAME|_|2|10\r\nID|_|0|2\r\n");
    write(dir.path(), "users.txt", "01John    \r\n");

    let inserts = generate_inserts(&config_for(dir.path())).unwrap();
    assert_eq!(
        inserts,
        vec!["INSERT INTO USERS (ID,NAME) VALUES (01,John    );"]
    );
}

#[test]
fn malformed_offsets_are_fatal() {
    let dir = users_fixture();
    write(
        dir.path(),
        "layout.txt",
        "USERS\nID|_|zero|2\nNAME|_|2|10\nHEADER_LITERAL\n",
    );
    write(dir.path(), "users_layout.txt", "ID|_|zero|2\nNAME|_|2|10\n");

    let err = generate_inserts(&config_for(dir.path())).unwrap_err();
    assert!(
        matches!(err, PipelineError::MalformedSpec { ref table, .. } if table == "USERS"),
        "unexpected error: {err}"
    );
}

#[test]
fn end_before_start_is_fatal() {
    let dir = users_fixture();
    write(
        dir.path(),
        "layout.txt",
        "USERS\nID|_|2|0\nNAME|_|2|10\nHEADER_LITERAL\n",
    );
    write(dir.path(), "users_layout.txt", "ID|_|2|0\nNAME|_|2|10\n");

    let err = generate_inserts(&config_for(dir.path())).unwrap_err();
    assert!(
        matches!(err, PipelineError::MalformedSpec { ref table, .. } if table == "USERS"),
        "unexpected error: {err}"
    );
}

#[test]
fn short_data_line_is_a_fatal_out_of_bounds() {
    let dir = users_fixture();
    write(dir.path(), "users.txt", "01John    \n02\n");

    let err = generate_inserts(&config_for(dir.path())).unwrap_err();
    assert!(
        matches!(
            err,
            PipelineError::OutOfBounds { line_no: 2, ref column, .. } if column == "NAME"
        ),
        "unexpected error: {err}"
    );
}
