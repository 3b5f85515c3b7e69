//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated data directory

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's setup into a test.
pub const INVENTORY_VARS: [&str; 7] = [
    "INVENTORY_DATA_DIR",
    "INVENTORY_BUSY_TIMEOUT",
    "INVENTORY_DISABLE_AUTOINIT",
    "INVENTORY_HOST",
    "INVENTORY_PORT",
    "INVENTORY_BUSY_TIMEOUT_MS",
    "INVENTORY_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the data directory (not created until a command needs it)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("inventory-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("inventory").expect("Failed to find inventory binary");
        for var in INVENTORY_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Run `init` and assert it succeeded.
    pub fn init(&self) {
        self.command().arg("init").assert().success();
    }

    /// Write `contents` to `<data_dir>/config.yaml`.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        let path = self.data_dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }
}
