//! Build command - the build-time half of the pipeline.

use anyhow::Result;

use crate::config::BuildParams;
use crate::fetch;
use crate::materialize::{
    self, ConfigStrategy, RenderParams, PRIVATE_CONFIG_FILE, SHARED_TEMPLATE_FILE,
};

/// Options for the build command.
pub struct BuildOptions {
    /// Copy `.env.shared` from the fetched source instead of rendering.
    pub from_template: bool,
    /// Skip the dependency-install step.
    pub skip_install: bool,
}

/// Execute the build command: fetch, install, materialize.
///
/// Steps run strictly in sequence and each is fatal on failure; there is no
/// partial-success or retry path.
pub fn cmd_build(params: &BuildParams, opts: BuildOptions) -> Result<()> {
    println!("=== soundcork container build ===\n");

    println!("[1/3] Fetching service source...");
    fetch::fetch_source(&params.service_git_url, &params.service_dir)?;

    if opts.skip_install {
        println!("\n[2/3] Skipping dependency install");
    } else {
        println!("\n[2/3] Installing service dependencies...");
        fetch::install_dependencies(&params.service_dir)?;
    }

    println!("\n[3/3] Materializing private config...");
    let strategy = if opts.from_template {
        ConfigStrategy::Copied(params.service_dir.join(SHARED_TEMPLATE_FILE))
    } else {
        ConfigStrategy::Rendered(RenderParams {
            baseurl: params.baseurl.clone(),
            port: params.port.clone(),
            datadir: params.datadir.clone(),
        })
    };
    let dest = params.service_dir.join(PRIVATE_CONFIG_FILE);
    materialize::materialize(&strategy, &dest)?;
    println!("Wrote {}", dest.display());

    println!("\nBuild complete. Start the service with 'corkbuild launch'.");
    Ok(())
}
