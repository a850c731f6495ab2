//! Shared testing utilities for sciml-bench integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FIXTURE_CONFIG: &str = include_str!("../fixtures/config.yml");

/// Testing harness providing an isolated home and work directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `content` as `config.yml` in the work directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("config.yml", content)
    }

    /// Write a file relative to the work directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Build a command for the compiled `sciml-bench` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("sciml-bench").expect("Failed to locate sciml-bench binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env_remove("SCIML_BENCH_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}
