//! Source fetch and dependency installation.
//!
//! The two build steps that precede config materialization. Both shell out
//! to external tools (`git`, `pip`); a failure in either aborts the build
//! with `DependencyFetch`. The installer's own mechanics are the package
//! manager's business, not this pipeline's.

use std::fs;
use std::path::Path;

use crate::error::PipelineError;
use crate::process::Cmd;

fn fetch_err(detail: impl ToString) -> PipelineError {
    PipelineError::DependencyFetch {
        detail: detail.to_string(),
    }
}

/// Clone the service source if it is not already present.
pub fn fetch_source(git_url: &str, service_dir: &Path) -> Result<(), PipelineError> {
    if service_dir.join(".git").exists() {
        println!("Service source already present at {}", service_dir.display());
        return Ok(());
    }

    if let Some(parent) = service_dir.parent() {
        fs::create_dir_all(parent).map_err(fetch_err)?;
    }

    println!("Cloning {}...", git_url);
    Cmd::new("git")
        .args(["clone", "--depth", "1", git_url])
        .arg_path(service_dir)
        .error_msg("git clone failed")
        .run_streaming()
        .map_err(|e| fetch_err(format!("{e:#}")))?;

    Ok(())
}

/// Install the service's dependencies from its manifest.
pub fn install_dependencies(service_dir: &Path) -> Result<(), PipelineError> {
    let manifest = service_dir.join("requirements.txt");
    if !manifest.exists() {
        return Err(fetch_err(format!(
            "dependency manifest not found at {}",
            manifest.display()
        )));
    }

    // Captured rather than streaming, so the installer's stderr ends up in
    // the DependencyFetch detail when it fails.
    Cmd::new("pip")
        .args(["install", "-r", "requirements.txt"])
        .dir(service_dir)
        .error_msg("pip install failed")
        .run()
        .map_err(|e| fetch_err(format!("{e:#}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn install_without_manifest_is_dependency_fetch() {
        let dir = TempDir::new().unwrap();

        let err = install_dependencies(dir.path()).unwrap_err();

        assert!(matches!(err, PipelineError::DependencyFetch { .. }));
        // The installer is never invoked; the manifest check fails first.
        assert!(err.to_string().contains("requirements.txt"));
    }

    #[test]
    fn fetch_skips_existing_checkout() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();

        // An unreachable URL proves git is not invoked for an existing tree.
        fetch_source("http://invalid.invalid/soundcork.git", dir.path()).unwrap();
    }
}
