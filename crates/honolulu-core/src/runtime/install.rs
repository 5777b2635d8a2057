//! Dependency installation collaborator

use super::check::PackageManager;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// Run the package manager's install command inside `dir`.
pub async fn install_dependencies(dir: &Path, manager: PackageManager) -> Result<()> {
    let mut command = Command::new(manager.command());
    if manager != PackageManager::Yarn {
        command.arg("install");
    }

    let output = command
        .current_dir(dir)
        .output()
        .await
        .with_context(|| format!("Failed to run {}", manager.install_command()))?;

    if !output.status.success() {
        anyhow::bail!(
            "{} failed: {}",
            manager.install_command(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}
