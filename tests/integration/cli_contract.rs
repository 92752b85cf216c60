use std::fs;

use tempfile::tempdir;

use crate::common::{assert_fails_with, assert_passes_silently, run_in, stdout};

#[test]
fn story_file_passes_even_when_absent() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &["Button.stories.tsx"]);

    assert_passes_silently(&output);
}

#[test]
fn component_with_story_passes() {
    let temp = tempdir().expect("can create temporary directory");
    fs::write(temp.path().join("Button.tsx"), "").expect("can write component");
    fs::write(temp.path().join("Button.stories.tsx"), "").expect("can write story");

    let output = run_in(temp.path(), &["Button.tsx"]);

    assert_passes_silently(&output);
}

#[test]
fn component_without_story_fails() {
    let temp = tempdir().expect("can create temporary directory");
    fs::write(temp.path().join("Button.tsx"), "").expect("can write component");

    let output = run_in(temp.path(), &["Button.tsx"]);

    assert_fails_with(&output, "not found: Button.stories.tsx");
}

#[test]
fn non_component_file_passes() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &["README.md"]);

    assert_passes_silently(&output);
}

#[test]
fn no_arguments_prints_usage() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &[]);

    assert_fails_with(&output, "Usage: check-story-book-file-exists.py <file_path>");
}

#[test]
fn nested_component_reports_basename_only() {
    let temp = tempdir().expect("can create temporary directory");
    fs::create_dir(temp.path().join("components")).expect("can create components dir");
    fs::write(temp.path().join("components/Card.tsx"), "").expect("can write component");

    let output = run_in(temp.path(), &["components/Card.tsx"]);

    assert_fails_with(&output, "not found: Card.stories.tsx");
}

#[test]
fn uppercase_extension_is_not_a_component() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &["Button.TSX"]);

    assert_passes_silently(&output);
}

#[test]
fn directory_named_like_story_does_not_count() {
    let temp = tempdir().expect("can create temporary directory");
    fs::create_dir(temp.path().join("Card.stories.tsx")).expect("can create directory");

    let output = run_in(temp.path(), &["Card.tsx"]);

    assert_fails_with(&output, "not found: Card.stories.tsx");
}

#[test]
fn logs_never_reach_stdout() {
    let temp = tempdir().expect("can create temporary directory");

    let output = std::process::Command::new(crate::common::BINARY_PATH)
        .arg("Card.tsx")
        .current_dir(temp.path())
        .env("RUST_LOG", "trace")
        .output()
        .expect("checker binary should run");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "not found: Card.stories.tsx\n");
}

#[test]
fn help_exits_zero() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("FILE_PATH"));
}

#[test]
fn hyphen_leading_component_is_checked() {
    let temp = tempdir().expect("can create temporary directory");

    let output = run_in(temp.path(), &["-x.tsx"]);
    assert_fails_with(&output, "not found: -x.stories.tsx");

    fs::write(temp.path().join("-x.stories.tsx"), "").expect("can write story");
    let output = run_in(temp.path(), &["-x.tsx"]);
    assert_passes_silently(&output);
}

#[cfg(unix)]
#[test]
fn non_utf8_component_is_checked() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let temp = tempdir().expect("can create temporary directory");
    let component = OsStr::from_bytes(b"caf\xe9.tsx");
    if fs::write(temp.path().join(OsStr::from_bytes(b"caf\xe9.stories.tsx")), "").is_err() {
        // Filesystem refuses non-UTF-8 names.
        return;
    }

    let output = std::process::Command::new(crate::common::BINARY_PATH)
        .arg(component)
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("checker binary should run");

    assert_passes_silently(&output);
}
