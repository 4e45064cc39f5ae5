//! Private-config materialization.
//!
//! Build-time component that produces the `.env.private` file the service
//! reads at startup. Two strategies exist; build configuration selects
//! exactly one per image build, and neither re-runs at container start.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_BASEURL, DEFAULT_DATADIR, DEFAULT_PORT};
use crate::error::PipelineError;

/// Name of the generated runtime config, relative to the service directory.
pub const PRIVATE_CONFIG_FILE: &str = ".env.private";

/// Name of the pre-baked template the copy strategy consumes.
pub const SHARED_TEMPLATE_FILE: &str = ".env.shared";

/// Parameters for the rendered strategy.
#[derive(Debug, Clone)]
pub struct RenderParams {
    pub baseurl: String,
    pub port: String,
    pub datadir: String,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            baseurl: DEFAULT_BASEURL.to_string(),
            port: DEFAULT_PORT.to_string(),
            datadir: DEFAULT_DATADIR.to_string(),
        }
    }
}

/// How the private config is produced.
#[derive(Debug, Clone)]
pub enum ConfigStrategy {
    /// Render key/value lines from build parameters.
    Rendered(RenderParams),
    /// Copy a shared template byte-for-byte.
    Copied(PathBuf),
}

/// Render the config body for the rendered strategy.
///
/// Pure string substitution: no URL or path validation. Empty parameter
/// values pass through as empty quoted strings (`base_url = ":"`).
pub fn render(params: &RenderParams) -> String {
    format!(
        "base_url = \"{}:{}\"\ndata_dir = \"{}\"\n",
        params.baseurl, params.port, params.datadir
    )
}

/// Produce the private config at `dest` using the given strategy.
///
/// The write truncates, so re-running with identical parameters yields a
/// byte-identical file. A missing template fails before `dest` is touched,
/// leaving no partial file behind.
pub fn materialize(strategy: &ConfigStrategy, dest: &Path) -> Result<(), PipelineError> {
    match strategy {
        ConfigStrategy::Rendered(params) => {
            fs::write(dest, render(params)).map_err(|source| PipelineError::ConfigWrite {
                path: dest.to_path_buf(),
                source,
            })
        }
        ConfigStrategy::Copied(template) => {
            if !template.exists() {
                return Err(PipelineError::MissingTemplate {
                    path: template.clone(),
                });
            }
            fs::copy(template, dest).map_err(|source| PipelineError::ConfigWrite {
                path: dest.to_path_buf(),
                source,
            })?;
            Ok(())
        }
    }
}
