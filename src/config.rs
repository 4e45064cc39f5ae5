//! Build-parameter handling.
//!
//! Parameters come from the process environment and an optional .env file
//! in the base directory; environment variables take precedence. Every
//! recognized parameter has a default, and unrecognized variables are
//! ignored. The whole set is captured once into an immutable struct so the
//! rest of the pipeline is a pure function of its inputs.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::Serialize;

pub const DEFAULT_BASEURL: &str = "http://soundcork.local.example.com";
pub const DEFAULT_PORT: &str = "8000";
pub const DEFAULT_DATADIR: &str = "/home/soundcork/db";
pub const DEFAULT_SERVICE_GIT_URL: &str = "https://github.com/soundcork/soundcork.git";
pub const DEFAULT_SERVICE_DIR: &str = "build/soundcork";
pub const DEFAULT_RUNTIME: &str = "fastapi";
pub const DEFAULT_MAIN_MODULE: &str = "main.py";

/// Run profile the service starts in.
///
/// The token is validated here rather than passed through opaquely, so a
/// typo in `TARGET` fails before any process is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Production mode (`fastapi run`).
    Run,
    /// Development mode with auto-reload (`fastapi dev`).
    Dev,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Run => "run",
            ExecutionMode::Dev => "dev",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "run" => Ok(ExecutionMode::Run),
            "dev" => Ok(ExecutionMode::Dev),
            other => bail!("invalid execution mode '{}' (expected 'run' or 'dev')", other),
        }
    }
}

/// Build parameters, fixed for the life of the built image.
#[derive(Debug, Clone, Serialize)]
pub struct BuildParams {
    /// URL prefix the service advertises (no trailing slash).
    pub baseurl: String,
    /// TCP port, string-encoded; joined to `baseurl` with a colon.
    pub port: String,
    /// Absolute path of the service's data directory.
    pub datadir: String,
    /// Execution mode the launch phase starts the service in.
    pub target: ExecutionMode,
    /// Git URL the service source is fetched from.
    pub service_git_url: String,
    /// Directory the service source lands in (and the launcher's cwd).
    pub service_dir: PathBuf,
    /// Runtime entrypoint that starts the service.
    pub runtime: String,
    /// Main module handed to the runtime entrypoint.
    pub main_module: String,
}

impl BuildParams {
    /// Load parameters from `<base_dir>/.env` and the environment.
    ///
    /// Environment variables override .env values. A relative `SERVICE_DIR`
    /// is resolved against `base_dir`.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let mut vars = HashMap::new();

        let env_path = base_dir.join(".env");
        if env_path.exists() {
            for item in dotenvy::from_path_iter(&env_path)? {
                let (key, value) = item?;
                vars.insert(key, value);
            }
        }

        for (key, value) in std::env::vars() {
            vars.insert(key, value);
        }

        let get = |key: &str, default: &str| -> String {
            vars.get(key).cloned().unwrap_or_else(|| default.to_string())
        };

        let target = get("TARGET", "run").parse()?;

        let service_dir = {
            let dir = PathBuf::from(get("SERVICE_DIR", DEFAULT_SERVICE_DIR));
            if dir.is_absolute() {
                dir
            } else {
                base_dir.join(dir)
            }
        };

        Ok(Self {
            baseurl: get("BASEURL", DEFAULT_BASEURL),
            port: get("PORT", DEFAULT_PORT),
            datadir: get("DATADIR", DEFAULT_DATADIR),
            target,
            service_git_url: get("SERVICE_GIT_URL", DEFAULT_SERVICE_GIT_URL),
            service_dir,
            runtime: get("RUNTIME", DEFAULT_RUNTIME),
            main_module: get("MAIN_MODULE", DEFAULT_MAIN_MODULE),
        })
    }

    /// Print parameters for debugging.
    pub fn print(&self) {
        println!("Build parameters:");
        println!("  BASEURL: {}", self.baseurl);
        println!("  PORT: {}", self.port);
        println!("  DATADIR: {}", self.datadir);
        println!("  TARGET: {}", self.target);
        println!("  SERVICE_GIT_URL: {}", self.service_git_url);
        println!("  SERVICE_DIR: {}", self.service_dir.display());
        println!("  RUNTIME: {}", self.runtime);
        println!("  MAIN_MODULE: {}", self.main_module);
    }
}
