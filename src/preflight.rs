//! Preflight checks for the build host.
//!
//! Validates host tools before a build. Run with `corkbuild preflight`.

use anyhow::{bail, Result};

use crate::config::BuildParams;

/// Result of a single preflight check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Warn,
}

impl CheckResult {
    fn pass_with(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: Some(details.to_string()),
        }
    }

    fn fail(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            details: Some(details.to_string()),
        }
    }

    fn warn(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warn,
            details: Some(details.to_string()),
        }
    }
}

/// Results of all preflight checks.
pub struct PreflightReport {
    pub checks: Vec<CheckResult>,
}

impl PreflightReport {
    /// Returns true if no check failed.
    pub fn all_passed(&self) -> bool {
        !self.checks.iter().any(|c| c.status == CheckStatus::Fail)
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("=== Preflight Check Results ===\n");
        for check in &self.checks {
            let icon = match check.status {
                CheckStatus::Pass => "✓",
                CheckStatus::Fail => "✗",
                CheckStatus::Warn => "⚠",
            };
            match &check.details {
                Some(details) => println!("  {} {} ({})", icon, check.name, details),
                None => println!("  {} {}", icon, check.name),
            }
        }
        println!();
    }
}

/// Run all preflight checks.
pub fn run_preflight(params: &BuildParams) -> PreflightReport {
    let mut checks = vec![check_tool("git"), check_tool("pip"), check_tool(&params.runtime)];

    if params.service_dir.exists() {
        checks.push(CheckResult::pass_with(
            "service source",
            &params.service_dir.display().to_string(),
        ));
    } else {
        checks.push(CheckResult::warn(
            "service source",
            "not fetched yet (corkbuild build will clone it)",
        ));
    }

    PreflightReport { checks }
}

/// Run preflight checks and fail if any check fails.
pub fn run_preflight_or_fail(params: &BuildParams) -> Result<()> {
    let report = run_preflight(params);
    report.print();
    if !report.all_passed() {
        bail!("preflight checks failed");
    }
    Ok(())
}

fn check_tool(name: &str) -> CheckResult {
    match which::which(name) {
        Ok(path) => CheckResult::pass_with(name, &path.display().to_string()),
        Err(_) => CheckResult::fail(name, "not found in PATH"),
    }
}
