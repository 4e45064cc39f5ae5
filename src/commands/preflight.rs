//! Preflight command - runs preflight checks.

use anyhow::Result;

use crate::config::BuildParams;
use crate::preflight;

/// Execute the preflight command.
pub fn cmd_preflight(params: &BuildParams, strict: bool) -> Result<()> {
    if strict {
        preflight::run_preflight_or_fail(params)?;
    } else {
        let report = preflight::run_preflight(params);
        report.print();
        if !report.all_passed() {
            println!("Some checks failed. Use --strict to fail with exit code 1.");
        }
    }
    Ok(())
}
