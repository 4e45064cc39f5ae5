//! External command execution.
//!
//! Thin builder over `std::process::Command` so every pipeline step reports
//! failures the same way: captured stderr folded into the error message, or
//! a streaming run for steps whose progress the user should watch.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Captured output of a finished command.
#[derive(Debug)]
pub struct CommandResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, or -1 if terminated by signal.
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }
}

/// Builder for one external command invocation.
pub struct Cmd {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    allow_fail: bool,
    error_prefix: Option<String>,
}

impl Cmd {
    pub fn new(program: impl AsRef<str>) -> Self {
        Self {
            program: program.as_ref().to_string(),
            args: Vec::new(),
            current_dir: None,
            allow_fail: false,
            error_prefix: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<str>) -> Self {
        self.args.push(arg.as_ref().to_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string());
        }
        self
    }

    pub fn arg_path(mut self, path: &Path) -> Self {
        self.args.push(path.to_string_lossy().into_owned());
        self
    }

    /// Set the working directory.
    pub fn dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Allow non-zero exit codes without failing.
    pub fn allow_fail(mut self) -> Self {
        self.allow_fail = true;
        self
    }

    /// Set a custom error message prefix.
    pub fn error_msg(mut self, msg: impl AsRef<str>) -> Self {
        self.error_prefix = Some(msg.as_ref().to_string());
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn failure_prefix(&self) -> String {
        self.error_prefix
            .clone()
            .unwrap_or_else(|| format!("'{}' failed", self.program))
    }

    /// Run the command and capture output.
    pub fn run(self) -> Result<CommandResult> {
        let output = self
            .command()
            .output()
            .with_context(|| format!("Failed to execute '{}'. Is it installed?", self.program))?;

        let result = CommandResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !self.allow_fail && !result.success() {
            let stderr = result.stderr.trim();
            if stderr.is_empty() {
                bail!("{} (exit code {})", self.failure_prefix(), result.code());
            } else {
                bail!(
                    "{} (exit code {}):\n{}",
                    self.failure_prefix(),
                    result.code(),
                    stderr
                );
            }
        }

        Ok(result)
    }

    /// Run the command with inherited stdio.
    ///
    /// Output goes directly to the terminal. Use for steps where the user
    /// should see progress (clone, dependency install).
    pub fn run_streaming(self) -> Result<ExitStatus> {
        let mut cmd = self.command();
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .status()
            .with_context(|| format!("Failed to execute '{}'. Is it installed?", self.program))?;

        if !self.allow_fail && !status.success() {
            bail!(
                "{} (exit code {})",
                self.failure_prefix(),
                status.code().unwrap_or(-1)
            );
        }

        Ok(status)
    }
}
