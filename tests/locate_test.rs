use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write_source(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
}

fn fixture_project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_source(root, "src/main/java/A.kt", "class A\n");
    write_source(root, "src/main/java/B.kt", "import A\n");
    write_source(root, "src/androidTest/java/AUiTest.kt", "import B\n");
    dir
}

#[test]
fn locate_prints_one_identifier_per_line() {
    let dir = fixture_project();
    Command::cargo_bin("testsift")
        .unwrap()
        .args([
            "locate",
            "src/main/java/A.kt",
            "--project-root",
            dir.path().to_str().unwrap(),
            "--recursive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("AUiTest\n"));
}

#[test]
fn locate_json_carries_source_and_tests() {
    let dir = fixture_project();
    let output = Command::cargo_bin("testsift")
        .unwrap()
        .args([
            "locate",
            "src/main/java/A.kt",
            "--project-root",
            dir.path().to_str().unwrap(),
            "--recursive",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["source"], "src/main/java/A.kt");
    assert_eq!(json["tests"][0], "AUiTest");
}

#[test]
fn locate_dedup_reports_shared_test_once() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_source(root, "src/main/java/A.kt", "class A\n");
    write_source(root, "src/main/java/B.kt", "import A\n");
    write_source(root, "src/main/java/D.kt", "import A\n");
    write_source(
        root,
        "src/androidTest/java/SharedUiTest.kt",
        "import B\nimport D\n",
    );

    Command::cargo_bin("testsift")
        .unwrap()
        .args([
            "locate",
            "src/main/java/A.kt",
            "--project-root",
            root.to_str().unwrap(),
            "--recursive",
            "--dedup",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("SharedUiTest\n"));
}

#[test]
fn tree_renders_importer_chain() {
    let dir = fixture_project();
    Command::cargo_bin("testsift")
        .unwrap()
        .args([
            "tree",
            "src/main/java/A.kt",
            "--project-root",
            dir.path().to_str().unwrap(),
            "--recursive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("A\n└── B\n    └── AUiTest\n"));
}

#[test]
fn tree_json_nests_children() {
    let dir = fixture_project();
    let output = Command::cargo_bin("testsift")
        .unwrap()
        .args([
            "tree",
            "src/main/java/A.kt",
            "--project-root",
            dir.path().to_str().unwrap(),
            "--recursive",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["identifier"], "A");
    assert_eq!(json["children"][0]["identifier"], "B");
    assert_eq!(json["children"][0]["children"][0]["identifier"], "AUiTest");
}

#[test]
fn cyclic_imports_do_not_hang_the_cli() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_source(root, "src/main/java/A.kt", "import B\n");
    write_source(root, "src/main/java/B.kt", "import A\n");

    Command::cargo_bin("testsift")
        .unwrap()
        .args([
            "tree",
            "src/main/java/A.kt",
            "--project-root",
            root.to_str().unwrap(),
            "--recursive",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(cycle)"));
}
