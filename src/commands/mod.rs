//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `build` - Run the build phase (fetch, install, materialize config)
//! - `launch` - Start the service and forward its exit code
//! - `show` - Display information
//! - `preflight` - Check host tools
//! - `clean` - Remove build artifacts

pub mod build;
pub mod clean;
pub mod launch;
mod preflight;
pub mod show;

pub use build::cmd_build;
pub use clean::cmd_clean;
pub use launch::cmd_launch;
pub use preflight::cmd_preflight;
pub use show::cmd_show;
