//! Clean command - removes build artifacts.

use anyhow::Result;
use std::fs;

use crate::config::BuildParams;
use crate::materialize::PRIVATE_CONFIG_FILE;

/// Execute the clean command.
///
/// Default removes only the materialized config (forcing a re-materialize
/// on the next build); `all` removes the whole fetched service tree.
pub fn cmd_clean(params: &BuildParams, all: bool) -> Result<()> {
    if all {
        if params.service_dir.exists() {
            fs::remove_dir_all(&params.service_dir)?;
            println!("Removed {}", params.service_dir.display());
        } else {
            println!("Nothing to clean.");
        }
        return Ok(());
    }

    let config_path = params.service_dir.join(PRIVATE_CONFIG_FILE);
    if config_path.exists() {
        fs::remove_file(&config_path)?;
        println!("Removed {}", config_path.display());
    } else {
        println!("Nothing to clean.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExecutionMode;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn params_for(service_dir: PathBuf) -> BuildParams {
        BuildParams {
            baseurl: "http://example.com".to_string(),
            port: "8000".to_string(),
            datadir: "/data".to_string(),
            target: ExecutionMode::Run,
            service_git_url: "http://example.com/soundcork.git".to_string(),
            service_dir,
            runtime: "fastapi".to_string(),
            main_module: "main.py".to_string(),
        }
    }

    #[test]
    fn default_clean_removes_only_the_config() {
        let dir = TempDir::new().unwrap();
        let service_dir = dir.path().join("soundcork");
        fs::create_dir_all(&service_dir).unwrap();
        fs::write(service_dir.join(PRIVATE_CONFIG_FILE), "base_url = \":\"\n").unwrap();
        fs::write(service_dir.join("main.py"), "").unwrap();

        cmd_clean(&params_for(service_dir.clone()), false).unwrap();

        assert!(!service_dir.join(PRIVATE_CONFIG_FILE).exists());
        // The fetched tree survives a default clean.
        assert!(service_dir.join("main.py").exists());
    }

    #[test]
    fn clean_all_removes_the_service_tree() {
        let dir = TempDir::new().unwrap();
        let service_dir = dir.path().join("soundcork");
        fs::create_dir_all(&service_dir).unwrap();
        fs::write(service_dir.join(PRIVATE_CONFIG_FILE), "base_url = \":\"\n").unwrap();

        cmd_clean(&params_for(service_dir.clone()), true).unwrap();

        assert!(!service_dir.exists());
    }

    #[test]
    fn clean_with_nothing_to_remove_succeeds() {
        let dir = TempDir::new().unwrap();
        let service_dir = dir.path().join("soundcork");

        cmd_clean(&params_for(service_dir.clone()), false).unwrap();
        cmd_clean(&params_for(service_dir), true).unwrap();
    }
}
