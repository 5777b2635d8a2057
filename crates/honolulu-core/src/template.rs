//! Bundled template root resolution
//!
//! The template tree ships next to the binary in release layouts and under
//! the workspace root during development. Resolution happens once at process
//! start and the resulting path is passed explicitly into the composer.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the bundled template location
pub const TEMPLATE_DIR_ENV: &str = "HONOLULU_TEMPLATE_DIR";

/// Resolve the template source tree.
///
/// Checked in order:
/// 1. `HONOLULU_TEMPLATE_DIR` environment variable
/// 2. `templates/default` next to the executable (installed layout)
/// 3. `templates/default` under the workspace root (source layout)
pub fn resolve_template_root() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
        let path = PathBuf::from(dir);
        if path.is_dir() {
            return Ok(path);
        }
        anyhow::bail!(
            "{} points at {}, which is not a directory",
            TEMPLATE_DIR_ENV,
            path.display()
        );
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    {
        let built = exe_dir.join("templates").join("default");
        if built.is_dir() {
            return Ok(built);
        }
    }

    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join("templates")
        .join("default");
    if source.is_dir() {
        return source
            .canonicalize()
            .context("Failed to canonicalize template directory");
    }

    anyhow::bail!(
        "Could not locate the bundled template. Set {} to a template directory.",
        TEMPLATE_DIR_ENV
    )
}
