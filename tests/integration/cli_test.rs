//! Integration tests for the bannergen CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, run_bannergen};

// ============================================================================
// Help and Listing
// ============================================================================

#[test]
fn generate_help_lists_options() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_bannergen(dir.path(), &["generate", "--help"]);

    assert_eq!(exit_code, 0);
    for flag in [
        "--text",
        "--font",
        "--color",
        "--no-info",
        "--include-info",
        "--nbsp",
        "--stdout",
    ] {
        assert!(stdout.contains(flag), "help should mention {}", flag);
    }
}

#[test]
fn fonts_lists_builtins_sorted() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_bannergen(dir.path(), &["fonts"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "standard\nterm\n");
}

#[test]
fn fonts_lists_font_directory() {
    let dir = TempDir::new().unwrap();
    let fonts = dir.path().join("fonts");
    fs::create_dir(&fonts).unwrap();
    fs::write(fonts.join("zeta.flf"), "").unwrap();
    fs::write(fonts.join("alpha.flf"), "").unwrap();

    Command::cargo_bin("bannergen")
        .unwrap()
        .current_dir(dir.path())
        .args(["fonts", "--font-dir", "fonts"])
        .assert()
        .success()
        .stdout("alpha\nzeta\n");
}

#[test]
fn fonts_with_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_bannergen(dir.path(), &["fonts", "--font-dir", "nope"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to list fonts in nope"));
    assert!(stderr.contains("Cannot collect names of built-in fonts."));
}

#[test]
fn colors_lists_default_first() {
    Command::cargo_bin("bannergen")
        .unwrap()
        .arg("colors")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("default\nblack\nred\n"))
        .stdout(predicate::str::contains("bright-white\n"));
}

#[test]
fn completions_for_bash() {
    Command::cargo_bin("bannergen")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bannergen"));
}

// ============================================================================
// Generate
// ============================================================================

#[test]
fn generate_to_stdout() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_bannergen(
        dir.path(),
        &["generate", "--stdout", "--text", "A", "--font", "term", "--no-info"],
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\nA\n");
    assert!(!dir.path().join("target").exists());
}

#[test]
fn generate_writes_default_location() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_bannergen(
        dir.path(),
        &["generate", "-t", "A", "-f", "term", "-c", "red", "--no-info"],
    );

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let written = fs::read_to_string(dir.path().join("target").join("banner.txt")).unwrap();
    assert_eq!(written, "\n${AnsiColor.RED}A${AnsiColor.DEFAULT}\n");
    assert!(stderr.contains("Generating banner"));
}

#[test]
fn generate_uses_manifest_name_and_version() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"shop\"\nversion = \"3.1.4\"\nedition = \"2021\"\n",
    )
    .unwrap();

    let (stdout, _stderr, exit_code) = run_bannergen(
        dir.path(),
        &["generate", "--stdout", "-f", "term", "--info", "v${project.version}"],
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\nshop\nv3.1.4\n");
}

#[test]
fn generate_reads_config_file_and_flags_win() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("banner.toml"),
        "[banner]\ntext = \"cfg\"\nfont = \"term\"\ninclude-info = false\ncolor = \"green\"\nfilename = \"startup.txt\"\n",
    )
    .unwrap();

    let (_stdout, stderr, exit_code) = run_bannergen(
        dir.path(),
        &["generate", "--color", "default", "-o", "out"],
    );

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let written = fs::read_to_string(dir.path().join("out").join("startup.txt")).unwrap();
    assert_eq!(written, "\ncfg\n");
}

#[test]
fn flags_turn_config_switches_back_on_and_off() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("banner.toml"),
        "[banner]\ntext = \"a b\"\nfont = \"term\"\ninclude-info = false\ninfo = \"info\"\nuse-non-breaking-space = true\n",
    )
    .unwrap();

    let (stdout, stderr, exit_code) = run_bannergen(dir.path(), &["generate", "--stdout"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "\na\u{00A0}b\n");

    let (stdout, stderr, exit_code) = run_bannergen(
        dir.path(),
        &["generate", "--stdout", "--include-info", "--no-nbsp"],
    );
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "\na b\ninfo\n");
}

#[test]
fn generate_with_nbsp() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_bannergen(
        dir.path(),
        &["generate", "--stdout", "-t", "a b", "-f", "term", "--no-info", "--nbsp"],
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\na\u{00A0}b\n");
}

#[test]
fn generate_with_external_font() {
    let dir = TempDir::new().unwrap();
    let font = format!("file:{}", fixtures_dir().join("external.flf").display());
    let (stdout, _stderr, exit_code) = run_bannergen(
        dir.path(),
        &["generate", "--stdout", "-t", "ext", "-f", &font, "--no-info"],
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\next\n");
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn unknown_font_fails_with_available_fonts() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_bannergen(dir.path(), &["generate", "-t", "A", "-f", "gothic"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("The built-in font \"gothic\" does not exist"));
    assert!(stderr.contains("Available fonts: standard, term."));
    assert!(!dir.path().join("target").exists());
}

#[test]
fn missing_font_file_fails_naming_path() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_bannergen(dir.path(), &["generate", "-t", "A", "-f", "file:nowhere.flf"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Font file nowhere.flf does not exist."));
}

#[test]
fn missing_text_without_manifest_fails() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_bannergen(dir.path(), &["generate"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No banner text given"));
}

#[test]
fn invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("banner.toml"), "[banner]\ntext = 5\n").unwrap();

    let (_stdout, stderr, exit_code) = run_bannergen(dir.path(), &["generate", "-t", "A"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("banner.toml"));
}
