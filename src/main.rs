//! Corkbuild - build and launch pipeline for the soundcork service.
//!
//! Two phases, evaluated at image-build time and container-start time:
//! - build: fetch the service source, install its dependencies, and
//!   materialize the `.env.private` config the service reads at startup
//! - launch: start the service in the selected execution mode and forward
//!   its exit code unchanged
#![allow(dead_code)]

mod commands;
mod config;
mod error;
mod fetch;
mod launch;
mod materialize;
mod preflight;
mod process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use config::{BuildParams, ExecutionMode};

#[derive(Parser)]
#[command(name = "corkbuild")]
#[command(about = "Build and launch pipeline for the soundcork service")]
#[command(
    after_help = "QUICK START:\n  corkbuild preflight  Check host tools\n  corkbuild build      Fetch source, install deps, write config\n  corkbuild launch     Start the service\n  corkbuild clean      Remove build artifacts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the build phase (fetch source, install deps, materialize config)
    Build {
        /// Copy .env.shared from the fetched source instead of rendering
        #[arg(long)]
        from_template: bool,

        /// Skip the dependency-install step
        #[arg(long)]
        skip_install: bool,
    },

    /// Start the service and forward its exit code
    Launch {
        /// Execution mode (run or dev); overrides the TARGET parameter
        #[arg(long)]
        target: Option<String>,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },

    /// Run preflight checks (verify host tools before build)
    Preflight {
        /// Fail if any checks fail (exit code 1)
        #[arg(long)]
        strict: bool,
    },

    /// Clean build artifacts (default: just the materialized config)
    Clean {
        /// Also remove the fetched service source
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show resolved build parameters
    Config {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show pipeline status (what has been built)
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = std::env::current_dir()?;
    let params = BuildParams::load(&base_dir)?;

    match cli.command {
        Commands::Build {
            from_template,
            skip_install,
        } => {
            commands::cmd_build(
                &params,
                commands::build::BuildOptions {
                    from_template,
                    skip_install,
                },
            )?;
        }

        Commands::Launch { target } => {
            let mode = target.map(|t| t.parse::<ExecutionMode>()).transpose()?;
            let code = commands::cmd_launch(&params, mode)?;
            std::process::exit(code);
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config { json } => commands::show::ShowTarget::Config { json },
                ShowTarget::Status => commands::show::ShowTarget::Status,
            };
            commands::cmd_show(&params, show_target)?;
        }

        Commands::Preflight { strict } => {
            commands::cmd_preflight(&params, strict)?;
        }

        Commands::Clean { all } => {
            commands::cmd_clean(&params, all)?;
        }
    }

    Ok(())
}
