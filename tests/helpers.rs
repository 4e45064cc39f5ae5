//! Shared test utilities for corkbuild tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment simulating a fetched service source tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Service working directory (launcher cwd, config destination)
    pub service_dir: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with a service directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service_dir = temp_dir.path().join("soundcork");
        fs::create_dir_all(&service_dir).expect("Failed to create service dir");

        Self {
            _temp_dir: temp_dir,
            service_dir,
        }
    }

    /// Path where the private config is materialized.
    pub fn private_config(&self) -> PathBuf {
        self.service_dir.join(".env.private")
    }

    /// Path of the shared template inside the service tree.
    pub fn shared_template(&self) -> PathBuf {
        self.service_dir.join(".env.shared")
    }
}

/// Create an executable stub runtime that records its arguments to
/// `args.txt` in the working directory and exits with the given code.
pub fn create_stub_runtime(dir: &Path, exit_code: i32) -> PathBuf {
    let path = dir.join("stub-runtime");
    let script = format!("#!/bin/sh\necho \"$@\" > args.txt\nexit {exit_code}\n");
    fs::write(&path, script).expect("Failed to write stub runtime");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod stub runtime");
    path
}
