//! Launch command - the start-time half of the pipeline.

use anyhow::Result;

use crate::config::{BuildParams, ExecutionMode};
use crate::launch::{self, Invocation};

/// Execute the launch command.
///
/// Blocks for the lifetime of the service and returns its exit code so
/// `main` can forward it as the process's own.
pub fn cmd_launch(params: &BuildParams, target: Option<ExecutionMode>) -> Result<i32> {
    let mode = target.unwrap_or(params.target);
    let invocation = Invocation::new(&params.runtime, mode, &params.main_module);

    println!(
        "Starting soundcork: {} {} {} (in {})",
        invocation.program,
        mode,
        invocation.module,
        params.service_dir.display()
    );
    launch::launch(&params.service_dir, &invocation)
}
