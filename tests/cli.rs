use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn corpus(dir: &tempfile::TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("corpus.txt");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn prints_poem_for_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = corpus(&dir, "This is a test of the Mugar Omni Theater sound system.");

    Command::cargo_bin("graph-poet")
        .unwrap()
        .arg("--corpus")
        .arg(&path)
        .args(["--input", "Test the system.", "--representation", "edge-list"])
        .assert()
        .success()
        .stdout("Test of the system.\n");
}

#[test]
fn reads_stdin_lines_and_writes_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = corpus(&dir, "one good line\none good line\none bad line");
    let out = dir.path().join("out");

    Command::cargo_bin("graph-poet")
        .unwrap()
        .arg("--corpus")
        .arg(&path)
        .arg("--summary")
        .arg(&out)
        .arg("--dump-graph")
        .write_stdin("One line\nline one\n")
        .assert()
        .success()
        .stdout("One good line\nline one\n")
        .stderr(predicate::str::contains("good -> line (2)"));

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["representation"], "adjacency");
    assert_eq!(summary["poems"].as_array().unwrap().len(), 2);
    assert_eq!(summary["poems"][0]["bridges"][0]["bridge"], "good");
}

#[test]
fn missing_corpus_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("graph-poet")
        .unwrap()
        .arg("--corpus")
        .arg(dir.path().join("absent.txt"))
        .args(["--input", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read corpus"));
}
