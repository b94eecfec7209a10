//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use cmdvet::{Command, CommandOptions};
use tempfile::TempDir;

/// Write a shell script into `dir` and return its path.
pub fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
    path
}

/// A command that runs `script` through `sh`.
pub fn sh_command(script: &PathBuf, options: CommandOptions) -> Command {
    Command::new("sh", options.with_parameter(script.display().to_string()))
        .expect("Failed to resolve sh")
}
