//! Integration tests for the generate-test-pdf CLI
//!
//! Runs the built binary and checks:
//! - Progress and summary output
//! - The generated file on disk
//! - Error handling for unwritable paths and bad arguments

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

fn setup_temp_dir() -> TempDir {
    tempdir().expect("Failed to create temp directory")
}

/// Run the CLI with `RUST_LOG` cleared so stderr only carries default logs.
fn run_cli_command(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_generate-test-pdf"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn assert_pdf_exists_and_valid(path: &Path) {
    assert!(path.exists(), "PDF file should exist: {}", path.display());
    let metadata = fs::metadata(path).expect("Failed to read file metadata");
    assert!(
        metadata.len() > 100,
        "PDF file should have content (> 100 bytes)"
    );

    let content = fs::read(path).expect("Failed to read PDF file");
    assert!(
        content.starts_with(b"%PDF-"),
        "File should start with PDF header"
    );
    assert!(
        content.ends_with(b"%%EOF\n"),
        "File should end with EOF marker"
    );
}

fn page_count(path: &Path) -> usize {
    let content = fs::read(path).expect("Failed to read PDF file");
    String::from_utf8_lossy(&content)
        .matches("/Type /Page\n")
        .count()
}

#[test]
fn test_generate_with_progress() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("progress.pdf");

    let output = run_cli_command(&[
        "--pages",
        "20",
        "--output",
        output_path.to_str().unwrap(),
    ])
    .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "Generating PDF with 20 pages...");
    assert_eq!(lines[1], "  Generated 10 pages...");
    assert_eq!(lines[2], "  Generated 20 pages...");
    assert_eq!(
        lines[3],
        format!("✓ PDF generated: {}", output_path.display())
    );
    assert_eq!(lines[4], "  Pages: 20");
    assert!(lines[5].starts_with("  Size: ") && lines[5].ends_with(" MB"));

    assert_pdf_exists_and_valid(&output_path);
    assert_eq!(page_count(&output_path), 20);
}

#[test]
fn test_small_run_has_no_progress_lines() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("small.pdf");

    let output = run_cli_command(&["--pages", "3", "-o", output_path.to_str().unwrap()]).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Generated"));
    assert!(stdout.contains("  Pages: 3"));
    assert_eq!(page_count(&output_path), 3);
}

#[test]
fn test_no_images_flag() {
    let temp_dir = setup_temp_dir();
    let with_shapes = temp_dir.path().join("shapes.pdf");
    let without_shapes = temp_dir.path().join("plain.pdf");

    let output = run_cli_command(&["--pages", "2", "--output", with_shapes.to_str().unwrap()])
        .unwrap();
    assert!(output.status.success());
    let output = run_cli_command(&[
        "--pages",
        "2",
        "--no-images",
        "--output",
        without_shapes.to_str().unwrap(),
    ])
    .unwrap();
    assert!(output.status.success());

    let shapes = String::from_utf8_lossy(&fs::read(&with_shapes).unwrap()).into_owned();
    let plain = String::from_utf8_lossy(&fs::read(&without_shapes).unwrap()).into_owned();
    assert!(shapes.contains(" re\n"));
    assert!(!plain.contains(" re\n"));
    assert!(!plain.contains(" c\n"));
    assert!(fs::metadata(&without_shapes).unwrap().len() < fs::metadata(&with_shapes).unwrap().len());
}

#[test]
fn test_page_size_and_title() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("a4.pdf");

    let output = run_cli_command(&[
        "--pages",
        "1",
        "--page-size",
        "a4",
        "--title",
        "Fixture title",
        "--output",
        output_path.to_str().unwrap(),
    ])
    .unwrap();

    assert!(output.status.success());
    let content = String::from_utf8_lossy(&fs::read(&output_path).unwrap()).into_owned();
    assert!(content.contains("/MediaBox [0 0 595 842]"));
    assert!(content.contains("/Title (Fixture title)"));
}

#[test]
fn test_compress_flag() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("compressed.pdf");

    let output = run_cli_command(&[
        "--pages",
        "2",
        "--compress",
        "--output",
        output_path.to_str().unwrap(),
    ])
    .unwrap();

    assert!(output.status.success());
    assert_pdf_exists_and_valid(&output_path);
    let content = String::from_utf8_lossy(&fs::read(&output_path).unwrap()).into_owned();
    assert!(content.contains("/Filter /FlateDecode"));
}

#[test]
fn test_json_report() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("report.pdf");

    let output = run_cli_command(&[
        "--pages",
        "12",
        "--json",
        "--output",
        output_path.to_str().unwrap(),
    ])
    .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["pages"], 12);
    assert_eq!(report["page_size"], "letter");
    assert_eq!(report["include_shapes"], true);
    assert_eq!(
        report["bytes"].as_u64().unwrap(),
        fs::metadata(&output_path).unwrap().len()
    );
}

#[test]
fn test_zero_pages() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("empty.pdf");

    let output = run_cli_command(&["--pages", "0", "--output", output_path.to_str().unwrap()])
        .unwrap();

    assert!(output.status.success());
    assert_pdf_exists_and_valid(&output_path);
    assert_eq!(page_count(&output_path), 0);
}

#[test]
fn test_unwritable_output_fails() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("no_such_dir").join("out.pdf");

    let output = run_cli_command(&["--pages", "1", "--output", output_path.to_str().unwrap()])
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Failed to generate"));
    assert!(!output_path.exists());
}

#[test]
fn test_invalid_arguments() {
    let output = run_cli_command(&["--pages", "many"]).unwrap();
    assert!(!output.status.success());

    let output = run_cli_command(&["--page-size", "tabloid"]).unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_help_and_version() {
    let output = run_cli_command(&["--help"]).unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--pages"));
    assert!(stdout.contains("--no-images"));
    assert!(stdout.contains("--page-size"));

    let output = run_cli_command(&["--version"]).unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("generate-test-pdf"));
}
