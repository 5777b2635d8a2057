//! Git initialization collaborator

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// Initialize a repository in `dir`: init, stage everything, one commit.
/// The first failing step aborts the whole collaborator.
pub async fn init_repository(dir: &Path) -> Result<()> {
    run_git(dir, &["init"]).await?;
    run_git(dir, &["add", "-A"]).await?;
    run_git(dir, &["commit", "-m", "Initial commit from create-honolulu"]).await?;
    Ok(())
}

async fn run_git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .await
        .context("Failed to run git (is it installed?)")?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}
