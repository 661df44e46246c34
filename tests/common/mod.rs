//! Common test utilities for simone-sync integration tests.
//!
//! Provides `TestEnv` for isolated workspace roots so tests never touch a
//! developer's own `.simone` directory or action log.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with an isolated workspace root.
///
/// The action log is redirected into its own temp directory via
/// `SIMONE_ACTION_LOG`, set per-command for parallel safety.
pub struct TestEnv {
    pub root: TempDir,
    pub log_dir: TempDir,
}

impl TestEnv {
    /// Create a new empty workspace root.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            log_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a workspace root containing a `.simone` directory.
    pub fn with_simone() -> Self {
        let env = Self::new();
        fs::create_dir_all(env.root.path().join(".simone")).unwrap();
        env
    }

    /// Get a Command for the sas binary rooted at this workspace.
    pub fn sas(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sas"));
        cmd.current_dir(self.root.path());
        cmd.env("SIMONE_ROOT", self.root.path());
        cmd.env("SIMONE_ACTION_LOG", self.action_log_path());
        cmd
    }

    /// Get the path to the workspace root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path of the redirected action log.
    pub fn action_log_path(&self) -> PathBuf {
        self.log_dir.path().join("actions.jsonl")
    }

    /// Read the action log contents, if any.
    pub fn action_log(&self) -> String {
        fs::read_to_string(self.action_log_path()).unwrap_or_default()
    }

    /// Write a configuration document at the conventional location.
    pub fn write_config(&self, content: &str) {
        let path = self.root.path().join(".simone/config/atlassian.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Write a milestone meta document and return its directory.
    pub fn write_milestone(&self, rel_dir: &str, content: &str) -> PathBuf {
        let dir = self.root.path().join(rel_dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("M07_milestone_meta.md"), content).unwrap();
        dir
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse JSON output from a command.
pub fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}
