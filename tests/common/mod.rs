//! Shared helpers for CLI integration tests.
//!
//! `TestProject` is a temp directory laid out like an extension repo, plus
//! a runner for the `extplan` binary with a scrubbed environment.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Sources for the three default surfaces
pub const DEFAULT_SOURCES: &[&str] = &[
    "src/popup/index.html",
    "src/background/index.ts",
    "src/content/index.ts",
];

/// Result of one CLI invocation
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.trim().is_empty()).collect()
    }

    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

pub struct TestProject {
    pub dir: TempDir,
    /// Canonical form of `dir`, matching what the binary sees as its cwd
    root: PathBuf,
}

impl TestProject {
    /// Empty project directory
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        Self { dir, root }
    }

    /// Project with the popup, background and content sources in place
    pub fn with_default_sources() -> Self {
        let project = Self::empty();
        for rel in DEFAULT_SOURCES {
            project.write(rel, "");
        }
        project
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.path(rel)).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_extplan"));
        cmd.current_dir(self.root())
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("EXTPLAN_OUT_DIR")
            .env_remove("EXTPLAN_VERBOSITY")
            .env_remove("EXTPLAN_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute extplan");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
