use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_documentate")))
}

#[test]
fn generates_html_by_default() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("app.py"), "class App:\n    pass\n").unwrap();
    let output = TempDir::new().unwrap();

    cmd()
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote 2 documents"));

    assert!(output.path().join("index.html").is_file());
    assert!(output.path().join("app.html").is_file());
}

#[test]
fn site_template_writes_class_pages() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("app.py"), "class App:\n    pass\n").unwrap();
    let output = TempDir::new().unwrap();

    cmd()
        .args(["--template", "site", "--input"])
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success();

    assert!(output.path().join("app/index.html").is_file());
    assert!(output.path().join("app/classes/App.html").is_file());
}

#[test]
fn missing_input_exits_with_error() {
    let output = TempDir::new().unwrap();

    cmd()
        .args(["-i", "/nonexistent/documentate-input", "-o"])
        .arg(output.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));

    assert!(fs::read_dir(output.path()).unwrap().next().is_none());
}

#[test]
fn empty_input_exits_with_error() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    cmd()
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No Python source files"));
}

#[test]
fn unknown_template_exits_with_error() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("app.py"), "").unwrap();
    let output = TempDir::new().unwrap();

    cmd()
        .args(["-t", "pdf", "-i"])
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown template: pdf"));
}

#[test]
fn partial_failure_exits_with_two() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("good.py"), "class Good:\n    pass\n").unwrap();
    fs::write(input.path().join("bad.py"), "class Bad(:\n").unwrap();
    let output = TempDir::new().unwrap();

    cmd()
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Syntax error in"));

    assert!(output.path().join("good.html").is_file());
}

#[test]
fn requires_input_and_output() {
    cmd().assert().failure();
}
