//! Service launcher.
//!
//! The start-time half of the pipeline: starts the wrapped service in the
//! directory that holds `.env.private`, blocks for the lifetime of the
//! process, and hands the exit code back for forwarding. No restart, no
//! supervision, no timeout.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::config::ExecutionMode;
use crate::error::PipelineError;
use crate::materialize::PRIVATE_CONFIG_FILE;

/// A fully resolved service invocation: `<runtime> <mode> <module>`.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: String,
    pub mode: ExecutionMode,
    pub module: String,
}

impl Invocation {
    pub fn new(runtime: &str, mode: ExecutionMode, module: &str) -> Self {
        Self {
            program: runtime.to_string(),
            mode,
            module: module.to_string(),
        }
    }

    /// Argument vector handed to the runtime, mode first.
    pub fn args(&self) -> Vec<String> {
        vec![self.mode.to_string(), self.module.clone()]
    }
}

/// Launch the service and block until it exits.
///
/// Fails fast with `ConfigNotFound` if the private config is absent, before
/// any process is spawned. Otherwise returns the child's exit code so the
/// caller can forward it unchanged; any failure the service reports at
/// startup stays opaque to this side.
pub fn launch(service_dir: &Path, invocation: &Invocation) -> Result<i32> {
    let config_path = service_dir.join(PRIVATE_CONFIG_FILE);
    if !config_path.exists() {
        return Err(PipelineError::ConfigNotFound { path: config_path }.into());
    }

    let status = Command::new(&invocation.program)
        .args(invocation.args())
        .current_dir(service_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| {
            format!(
                "Failed to execute '{}'. Is it installed?",
                invocation.program
            )
        })?;

    Ok(status.code().unwrap_or(-1))
}
