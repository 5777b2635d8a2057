//! package.json editing
//!
//! Manifest edits parse the existing JSON, mutate only the named keys, and
//! write the document back with stable two-space indentation. All other
//! fields pass through unchanged, in their original order (serde_json's
//! `preserve_order` feature keeps `Map` insertion-ordered).

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Read, mutate, and rewrite a package manifest in place.
pub async fn edit_manifest<F>(path: &Path, mutate: F) -> Result<()>
where
    F: FnOnce(&mut Map<String, Value>),
{
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let object = document
        .as_object_mut()
        .with_context(|| format!("{} is not a JSON object", path.display()))?;

    mutate(object);

    let mut rendered = serde_json::to_string_pretty(&document)?;
    rendered.push('\n');
    fs::write(path, rendered)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Insert entries into the named dependency table, creating it when absent.
pub fn add_dependencies(
    manifest: &mut Map<String, Value>,
    table: &str,
    entries: &[(&str, &str)],
) {
    let deps = manifest
        .entry(table.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if let Some(deps) = deps.as_object_mut() {
        for (name, version) in entries {
            deps.insert((*name).to_string(), Value::String((*version).to_string()));
        }
    }
}

/// Remove the named entries from a dependency table, if present.
pub fn remove_dependencies(manifest: &mut Map<String, Value>, table: &str, names: &[&str]) {
    if let Some(deps) = manifest.get_mut(table).and_then(Value::as_object_mut) {
        for name in names {
            deps.remove(*name);
        }
    }
}
