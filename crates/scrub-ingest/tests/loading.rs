use std::path::PathBuf;

use scrub_ingest::{LoadError, load_table, read_sample, sniff_delimiter};

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_with_sniffed_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "data.csv", b"name;age\nAlice;30\nBob;25\n");
    let sample = read_sample(&path).unwrap();
    let detected = sniff_delimiter(&sample).ok();
    assert_eq!(detected, Some(b';'));

    let loaded = load_table(&path, detected).unwrap();
    assert_eq!(loaded.delimiter, b';');
    assert_eq!(loaded.table.width(), 2);
    assert_eq!(loaded.table.height(), 2);
}

#[test]
fn falls_back_when_sniffed_delimiter_collapses_to_one_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "data.txt", b"a|b|c\n1|2|3\n");
    // Deliberately wrong hint: pipe content sniffed as comma.
    let loaded = load_table(&path, Some(b',')).unwrap();
    assert_eq!(loaded.delimiter, b'|');
    assert_eq!(loaded.table.width(), 3);
}

#[test]
fn fallback_priority_prefers_tab() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "data.tsv", b"a\tb\n1\t2\n");
    let loaded = load_table(&path, None).unwrap();
    assert_eq!(loaded.delimiter, b'\t');
}

#[test]
fn last_resort_infers_a_nonstandard_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "colon.txt", b"name:age\nAlice:30\nBob:25\n");
    let loaded = load_table(&path, None).unwrap();
    assert_eq!(loaded.delimiter, b':');
    assert_eq!(loaded.table.width(), 2);
    assert_eq!(loaded.table.height(), 2);
    assert_eq!(loaded.table.column("age").unwrap().cells[0].render(), "30");
}

#[test]
fn last_resort_accepts_a_single_column_parse() {
    // Every field is quoted, so the inferred colon never splits a row.
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "quoted.txt", b"\"x:y\"\n\"1:2\"\n\"3:4\"\n");
    let loaded = load_table(&path, None).unwrap();
    assert_eq!(loaded.delimiter, b':');
    assert_eq!(loaded.table.width(), 1);
    assert_eq!(loaded.table.height(), 2);
}

#[test]
fn undelimited_file_fails_with_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "plain.txt", b"value\n1\n2\n");
    assert!(matches!(
        load_table(&path, None),
        Err(LoadError::NoUsableDelimiter { .. })
    ));

    let empty = write_fixture(&dir, "empty.csv", b"");
    assert!(matches!(
        load_table(&empty, None),
        Err(LoadError::NoUsableDelimiter { .. })
    ));
}

#[test]
fn invalid_bytes_do_not_fail_the_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "latin.csv", b"name,city\nJos\xe9,Madrid\nAna,Porto\n");
    let loaded = load_table(&path, Some(b',')).unwrap();
    assert_eq!(loaded.table.height(), 2);
    let names = loaded.table.column("name").unwrap();
    assert_eq!(names.cells[0].render(), "Jos");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    assert!(matches!(
        load_table(&path, None),
        Err(LoadError::Io { .. })
    ));
}
