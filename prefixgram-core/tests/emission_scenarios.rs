//! End-to-end emission scenarios over in-memory and on-disk corpora

use prefixgram_core::{emit_file, line_records, CoreError, Emitter};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn emit_text(text: &str) -> String {
    let mut emitter = Emitter::new(Vec::new());
    emitter.emit_reader(Cursor::new(text)).unwrap();
    let (out, _) = emitter.finish().unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_single_word_line() {
    assert_eq!(emit_text("a\n"), "a 1\n");
}

#[test]
fn test_two_word_line_in_order() {
    assert_eq!(emit_text("I am\n"), "I 1\na 1\nI a 1\nam 1\nI am 1\n");
}

#[test]
fn test_double_space_scenario() {
    assert_eq!(emit_text("x  y\n"), "x 1\ny 1\n y 1\nx  y 1\n");
}

#[test]
fn test_leading_space_gives_empty_history() {
    assert_eq!(line_records(" ab"), vec!["a 1", " a 1", "ab 1", " ab 1"]);
}

#[test]
fn test_full_sentence() {
    let records = line_records("we can go");
    assert_eq!(
        records,
        vec![
            "w 1", "we 1", //
            "c 1", "we c 1", "ca 1", "we ca 1", "can 1", "we can 1", //
            "g 1", "can g 1", "we can g 1", "go 1", "can go 1", "we can go 1",
        ]
    );
}

#[test]
fn test_context_never_spans_lines() {
    let out = emit_text("the cat\nsat\n");
    assert!(!out.contains("cat s"));
    assert!(out.ends_with("s 1\nsa 1\nsat 1\n"));
}

#[test]
fn test_repeated_keys_are_not_merged() {
    let out = emit_text("a a\n");
    assert_eq!(out, "a 1\na 1\na a 1\n");
    assert_eq!(out.lines().filter(|l| *l == "a 1").count(), 2);
}

#[test]
fn test_empty_file_produces_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let mut out = Vec::new();
    let stats = emit_file(&path, &mut out).unwrap();
    assert!(out.is_empty());
    assert_eq!(stats.lines, 0);
}

#[test]
fn test_blank_lines_produce_nothing() {
    assert_eq!(emit_text("\n\n\r\n"), "");
}

#[test]
fn test_two_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corpus.txt");
    fs::write(&path, "I am here\nyou are  there\n東京 に 行く\n").unwrap();

    let mut first = Vec::new();
    let mut second = Vec::new();
    emit_file(&path, &mut first).unwrap();
    emit_file(&path, &mut second).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_is_input_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.txt");

    let err = emit_file(&path, Vec::new()).unwrap_err();
    assert!(matches!(err, CoreError::InputUnavailable { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn test_directory_is_not_a_corpus() {
    let dir = TempDir::new().unwrap();
    // Opening a directory succeeds on some platforms and fails on read on
    // others; both must be reported as errors, never as output.
    let mut out = Vec::new();
    let result = emit_file(dir.path(), &mut out);
    assert!(matches!(
        result,
        Err(CoreError::InputUnavailable { .. }) | Err(CoreError::Read { .. })
    ));
    assert!(out.is_empty());
}
