//! Show command - displays information.

use anyhow::Result;

use crate::config::BuildParams;
use crate::materialize::PRIVATE_CONFIG_FILE;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show resolved build parameters.
    Config { json: bool },
    /// Show pipeline status.
    Status,
}

/// Execute the show command.
pub fn cmd_show(params: &BuildParams, target: ShowTarget) -> Result<()> {
    match target {
        ShowTarget::Config { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(params)?);
            } else {
                params.print();
            }
        }
        ShowTarget::Status => {
            let source_fetched = params.service_dir.join(".git").exists();
            let config_path = params.service_dir.join(PRIVATE_CONFIG_FILE);
            let config_materialized = config_path.exists();

            println!("Pipeline status:");
            if source_fetched {
                println!("  Service source: FETCHED ({})", params.service_dir.display());
            } else {
                println!("  Service source: NOT FETCHED (run 'corkbuild build')");
            }
            if config_materialized {
                println!("  Private config: MATERIALIZED ({})", config_path.display());
            } else {
                println!("  Private config: NOT MATERIALIZED (run 'corkbuild build')");
            }
        }
    }
    Ok(())
}
