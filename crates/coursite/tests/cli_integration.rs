//! Integration tests that run the coursite binary

mod common;

use std::process::Command;

fn coursite_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_coursite"))
}

#[test]
fn test_build_project() {
    let project = common::create_temp_project();

    let output = coursite_bin()
        .arg(project.path())
        .output()
        .expect("Failed to run coursite");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "Command should succeed: {}", stderr);
    assert!(stderr.contains("Building"), "Should log progress: {}", stderr);
    assert!(stderr.contains("OK"), "Should report success: {}", stderr);
    assert!(project.path().join("dist/ex/exercise.key.cpp.html").is_file());
}

#[test]
fn test_output_flag() {
    let project = common::create_temp_project();
    let out = project.path().join("public");

    let output = coursite_bin()
        .arg(project.path())
        .arg("-o")
        .arg(&out)
        .arg("--clean")
        .output()
        .expect("Failed to run coursite");

    assert!(output.status.success());
    assert!(out.join("index.html").is_file());
    assert!(!project.path().join("dist").exists());
}

#[test]
fn test_failures_set_exit_code() {
    let project = common::create_temp_project();
    std::fs::write(project.path().join("src/bad.sql.yaml"), "questionList: [").unwrap();

    let output = coursite_bin()
        .arg(project.path())
        .output()
        .expect("Failed to run coursite");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.sql.yaml"), "Should name the file: {}", stderr);
    assert!(project.path().join("dist/index.html").is_file());
}

#[test]
fn test_base_dir_must_be_a_directory() {
    let project = common::create_temp_project();

    let output = coursite_bin()
        .arg(project.path().join("src/notes.txt"))
        .output()
        .expect("Failed to run coursite");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not a directory"), "{}", stderr);
}
