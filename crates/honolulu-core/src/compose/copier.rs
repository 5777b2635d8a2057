//! File and directory copying from the template tree

use super::ComposeReport;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Root config files copied verbatim when present in the template
pub const ROOT_FILES: &[&str] = &[
    "package.json",
    "tsconfig.json",
    "turbo.json",
    "biome.json",
    "vitest.config.ts",
    ".gitignore",
];

/// The three mandatory workspace subtrees
pub const WORKSPACE_SUBTREES: &[&str] = &["apps/api", "apps/web", "packages/shared"];

/// Directory names never copied out of the template: dependency caches,
/// incremental-build caches, compiled output, and VCS metadata. Fixed
/// deny-set, not user-configurable.
pub const SKIP_DIRS: &[&str] = &["node_modules", ".turbo", "dist", ".git"];

/// Copy the fixed root files, skipping any that fail (a template revision may
/// simply not carry them). Skips are recorded in the report.
pub async fn copy_root_files(template_root: &Path, target_dir: &Path, report: &mut ComposeReport) {
    for file in ROOT_FILES {
        let src = template_root.join(file);
        let dest = target_dir.join(file);
        match tokio::fs::copy(&src, &dest).await {
            Ok(_) => report.copied_files += 1,
            Err(_) => report.skipped.push((*file).to_string()),
        }
    }
}

fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name))
}

/// Recursively copy `src` into `dest`, preserving relative structure and
/// skipping the [`SKIP_DIRS`] deny-set. Returns the number of files copied.
/// Any failure here is fatal to composition.
pub async fn copy_subtree(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        anyhow::bail!("Template subtree missing: {}", src.display());
    }

    let mut copied = 0;
    for entry in WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
    {
        let entry = entry.with_context(|| format!("Failed to read {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("Path escaped template root {}", src.display()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            tokio::fs::create_dir_all(&target)
                .await
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            tokio::fs::copy(entry.path(), &target)
                .await
                .with_context(|| format!("Failed to copy {}", target.display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Remove a directory tree, tolerating its absence.
pub(crate) async fn remove_dir_if_exists(path: &Path) -> Result<()> {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to remove directory {}", path.display()))
        }
    }
}

/// Remove a single file, tolerating its absence.
pub(crate) async fn remove_file_if_exists(path: &Path) -> Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_copy_subtree_skips_deny_set() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("src/routes")).unwrap();
        fs::create_dir_all(src.join("node_modules/left-pad")).unwrap();
        fs::create_dir_all(src.join(".git")).unwrap();
        fs::create_dir_all(src.join("dist")).unwrap();
        fs::write(src.join("package.json"), "{}").unwrap();
        fs::write(src.join("src/routes/todos.ts"), "export {};").unwrap();
        fs::write(src.join("node_modules/left-pad/index.js"), "module.exports").unwrap();
        fs::write(src.join("dist/bundle.js"), "bundled").unwrap();

        let dest = tmp.path().join("dest");
        let copied = copy_subtree(&src, &dest).await.unwrap();

        assert_eq!(copied, 2);
        assert!(dest.join("package.json").is_file());
        assert!(dest.join("src/routes/todos.ts").is_file());
        assert!(!dest.join("node_modules").exists());
        assert!(!dest.join("dist").exists());
        assert!(!dest.join(".git").exists());
    }

    #[tokio::test]
    async fn test_copy_subtree_missing_source_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let err = copy_subtree(&tmp.path().join("absent"), &tmp.path().join("out"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Template subtree missing"));
    }

    #[tokio::test]
    async fn test_skip_dir_applies_to_directories_only() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        // A file that happens to share a deny-set name still gets copied
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("dist"), "not a directory").unwrap();

        let dest = tmp.path().join("dest");
        let copied = copy_subtree(&src, &dest).await.unwrap();
        assert_eq!(copied, 1);
        assert!(dest.join("dist").is_file());
    }
}
