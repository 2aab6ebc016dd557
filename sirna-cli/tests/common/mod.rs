#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Two-record FASTA fixture; `tx2` is wrapped over two lines.
pub const TARGETS_FASTA: &str = "tests/data/targets.fasta";

/// A `sirna` command with progress messages suppressed
pub fn sirna() -> Command {
    let mut cmd = Command::cargo_bin("sirna").unwrap();
    cmd.arg("-q");
    cmd
}

/// Runs `sirna` with the given arguments and returns stdout, asserting success.
pub fn run_sirna(args: &[&str]) -> String {
    let output = sirna().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

/// Writes `contents` to a temporary file that lives as long as the handle.
pub fn temp_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
