//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const BERTH_ENV_VARS: &[&str] = &[
    "BERTH_DOCKER",
    "BERTH_VOLUMES_ROOT",
    "BERTH_HELPER_CONTAINER",
    "BERTH_VOLUME_ACCESS",
    "BERTH_TEARDOWN_WAIT",
    "BERTH_REGISTRY_PREFIX",
    "RUST_LOG",
];

/// Isolated working directory and config home for one test
pub struct TestEnv {
    pub work_dir: TempDir,
    pub config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
        }
    }

    pub fn write_project_config(&self, content: &str) {
        std::fs::write(self.work_dir.path().join("berth.toml"), content).unwrap();
    }

    pub fn path(&self, rel: &str) -> std::path::PathBuf {
        self.work_dir.path().join(rel)
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_berth"));
        cmd.current_dir(self.work_dir.path())
            .env("BERTH_TEST_CONFIG_HOME", self.config_home.path());
        for var in BERTH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> RunResult {
        RunResult::from(self.command().args(args).output().unwrap())
    }

    pub fn root(&self) -> &Path {
        self.work_dir.path()
    }
}

pub struct RunResult {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunResult {
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}
