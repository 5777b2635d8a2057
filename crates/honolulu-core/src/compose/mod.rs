//! Template composition
//!
//! Turns a `TemplateOptions` record plus the bundled template tree into a
//! concrete project directory:
//!
//! 1. Create the target root
//! 2. Copy fixed root config files (best effort, recorded when skipped)
//! 3. Generate README and env files from the option lookup tables
//! 4. Copy the `apps/api`, `apps/web`, `packages/shared` subtrees (fatal on
//!    failure)
//! 5. Apply the architecture, styling, and API-style transforms
//!
//! Composition is one-shot scaffolding, not re-configuration: re-running
//! against a non-empty target merges and overwrites per step but never cleans
//! up edits a previous run made under different options.

pub mod architecture;
pub mod copier;
pub mod env;
pub mod manifest;
pub mod openapi;
pub mod readme;
pub mod style;

use crate::options::{ApiStyle, Architecture, Style, TemplateOptions};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

pub use copier::{ROOT_FILES, SKIP_DIRS, WORKSPACE_SUBTREES};

/// Outcome of a successful composition
#[derive(Debug, Default)]
pub struct ComposeReport {
    /// Files written into the target tree
    pub copied_files: usize,
    /// Optional root files and generated files that could not be written
    pub skipped: Vec<String>,
}

/// Compose a project at `target_dir` from the template at `template_root`.
///
/// Mandatory subtree copies abort composition; optional root-file copies and
/// generated-file writes degrade to entries in [`ComposeReport::skipped`].
pub async fn compose(
    template_root: &Path,
    target_dir: &Path,
    options: &TemplateOptions,
) -> Result<ComposeReport> {
    options.validate()?;

    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    let mut report = ComposeReport::default();

    copier::copy_root_files(template_root, target_dir, &mut report).await;

    if fs::write(target_dir.join("README.md"), readme::render_readme(options))
        .await
        .is_err()
    {
        report.skipped.push("README.md".to_string());
    } else {
        report.copied_files += 1;
    }

    let env_content = env::render_env(options);
    for name in [".env", ".env.local.example"] {
        if fs::write(target_dir.join(name), &env_content).await.is_err() {
            report.skipped.push(name.to_string());
        } else {
            report.copied_files += 1;
        }
    }

    for subtree in WORKSPACE_SUBTREES {
        report.copied_files += copier::copy_subtree(
            &template_root.join(subtree),
            &target_dir.join(subtree),
        )
        .await
        .with_context(|| format!("Failed to copy workspace {}", subtree))?;
    }

    if options.architecture == Architecture::Unopinionated {
        architecture::apply(target_dir).await?;
    }

    if options.style == Style::Classic {
        style::apply(target_dir).await?;
    }

    if options.api_style == ApiStyle::Openapi {
        openapi::apply(target_dir).await?;
    }

    Ok(report)
}
