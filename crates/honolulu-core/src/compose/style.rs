//! Styling transform
//!
//! `tailwind` keeps the template untouched. `shadcn` is a placeholder that
//! only suppresses the classic cleanup (component vendoring lands later).
//! `classic` removes the CSS framework: config files, devDependency entries,
//! and the utility directives in the global stylesheet.

use super::copier::remove_file_if_exists;
use super::manifest;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// devDependency entries stripped from `apps/web/package.json`
pub const CSS_FRAMEWORK_DEV_DEPENDENCIES: &[&str] =
    &["tailwindcss", "postcss", "autoprefixer", "@tailwindcss/vite"];

/// Framework config files removed from `apps/web`
const CSS_FRAMEWORK_CONFIGS: &[&str] = &[
    "tailwind.config.js",
    "tailwind.config.ts",
    "postcss.config.js",
    "postcss.config.ts",
];

const PLAIN_CSS: &str = r#":root {
  font-family: system-ui, -apple-system, sans-serif;
  line-height: 1.5;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  min-height: 100vh;
  background-color: #fafafa;
  color: #1a1a1a;
}

main {
  max-width: 640px;
  margin: 0 auto;
  padding: 2rem;
}

button {
  padding: 0.5rem 1rem;
  border: 1px solid #ccc;
  border-radius: 6px;
  background: #fff;
  cursor: pointer;
}

button:hover {
  border-color: #888;
}
"#;

/// Apply the classic-CSS cleanup to a composed target tree.
pub async fn apply(target_dir: &Path) -> Result<()> {
    let web = target_dir.join("apps/web");

    for config in CSS_FRAMEWORK_CONFIGS {
        remove_file_if_exists(&web.join(config)).await?;
    }

    let manifest_path = web.join("package.json");
    if manifest_path.is_file() {
        manifest::edit_manifest(&manifest_path, |manifest| {
            manifest::remove_dependencies(
                manifest,
                "devDependencies",
                CSS_FRAMEWORK_DEV_DEPENDENCIES,
            );
        })
        .await?;
    }

    let stylesheet = web.join("src/index.css");
    fs::write(&stylesheet, PLAIN_CSS)
        .await
        .with_context(|| format!("Failed to write {}", stylesheet.display()))?;

    Ok(())
}
