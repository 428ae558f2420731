use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

const DOC: &str = "---\ntitle: Test\nauthor: Alice\n---\nHello **world**\n";

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_template-gen"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run template-gen")
}

fn file_names(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_single_argument_derives_output_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc.md"), DOC).unwrap();

    let output = run(&dir, &["doc.md"]);
    assert!(output.status.success(), "{:?}", output);

    let html = fs::read_to_string(dir.path().join("doc.md.html")).unwrap();
    assert!(html.contains(r#"<h1 class="title">Test</h1>"#));
    assert!(html.contains("Alice"));
    assert!(html.contains("<strong>world</strong>"));
}

#[test]
fn test_explicit_output_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc.md"), DOC).unwrap();

    let output = run(&dir, &["doc.md", "page.html"]);
    assert!(output.status.success(), "{:?}", output);
    assert!(dir.path().join("page.html").exists());
    assert!(!dir.path().join("doc.md.html").exists());
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc.md"), DOC).unwrap();

    assert!(run(&dir, &["doc.md", "a.html"]).status.success());
    assert!(run(&dir, &["doc.md", "b.html"]).status.success());
    assert_eq!(
        fs::read(dir.path().join("a.html")).unwrap(),
        fs::read(dir.path().join("b.html")).unwrap()
    );
}

#[test]
fn test_no_arguments_is_usage_error() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &[]);
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(file_names(&dir).is_empty());
}

#[test]
fn test_too_many_arguments_is_usage_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc.md"), DOC).unwrap();

    let output = run(&dir, &["doc.md", "out.html", "extra"]);
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert_eq!(file_names(&dir), vec!["doc.md".to_string()]);
}

#[test]
fn test_missing_delimiter_produces_no_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc.md"), "title: Test\n\nHello").unwrap();

    let output = run(&dir, &["doc.md"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("delimiter"), "{stderr}");
    assert!(!dir.path().join("doc.md.html").exists());
}

#[test]
fn test_malformed_metadata_produces_no_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc.md"), "---\ntitle: [oops\n---\nbody").unwrap();

    let output = run(&dir, &["doc.md"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("doc.md.html").exists());
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["absent.md"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.md"), "{stderr}");
    assert!(file_names(&dir).is_empty());
}

#[test]
fn test_unwritable_output_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("doc.md"), DOC).unwrap();

    let output = run(&dir, &["doc.md", "missing/out.html"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing/out.html"), "{stderr}");
    assert_eq!(file_names(&dir), vec!["doc.md".to_string()]);
}

#[test]
fn test_library_build_html() {
    let html = template_gen::build_html(DOC.as_bytes()).unwrap();
    assert!(html.contains("<strong>world</strong>"));
}
