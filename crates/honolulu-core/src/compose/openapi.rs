//! OpenAPI documentation transform
//!
//! When the user picks the OpenAPI style, the API gains a `/doc` route that
//! serves a generated spec and a `/reference` route that renders the Scalar
//! reference UI. The dependency entries go through the manifest editor; the
//! entry file is treated as an opaque text blob and spliced at a sentinel.

use super::manifest;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Packages added to `apps/api/package.json` dependencies
pub const OPENAPI_DEPENDENCIES: &[(&str, &str)] = &[
    ("hono-openapi", "^0.4.6"),
    ("@scalar/hono-api-reference", "^0.5.149"),
];

/// Presence of this marker means the transform already ran
const IMPORT_MARKER: &str = "from \"hono-openapi\"";

const IMPORTS: &str = "\
import { openAPISpecs } from \"hono-openapi\";
import { apiReference } from \"@scalar/hono-api-reference\";
";

/// Banner comment preceding the template's not-found handler
const NOT_FOUND_SENTINEL: &str = "// ============================================\n// 404 Handler";

const EXPORT_MARKER: &str = "export default";

const DOC_ROUTES: &str = r#"// ============================================
// API Documentation
// ============================================

app.get(
  "/doc",
  openAPISpecs(app, {
    documentation: {
      info: {
        title: "Honolulu API",
        version: "1.0.0",
        description: "Honolulu REST API",
      },
    },
  }),
);

app.get("/reference", apiReference({ spec: { url: "/doc" } }));

"#;

/// Splice the OpenAPI imports and route registrations into the API entry
/// source. Insertion point: before the not-found sentinel when present, else
/// before the default export, else appended. A marker-presence check makes
/// re-application a no-op.
pub fn inject_doc_routes(source: &str) -> String {
    if source.contains(IMPORT_MARKER) {
        return source.to_string();
    }

    let body = if let Some(at) = source.find(NOT_FOUND_SENTINEL) {
        format!("{}{}{}", &source[..at], DOC_ROUTES, &source[at..])
    } else if let Some(at) = source.find(EXPORT_MARKER) {
        format!("{}{}{}", &source[..at], DOC_ROUTES, &source[at..])
    } else {
        format!("{}\n{}", source, DOC_ROUTES)
    };

    format!("{}{}", IMPORTS, body)
}

/// Apply the OpenAPI transform to a composed target tree.
pub async fn apply(target_dir: &Path) -> Result<()> {
    let manifest_path = target_dir.join("apps/api/package.json");
    manifest::edit_manifest(&manifest_path, |manifest| {
        manifest::add_dependencies(manifest, "dependencies", OPENAPI_DEPENDENCIES);
    })
    .await?;

    let entry_path = target_dir.join("apps/api/src/index.ts");
    let source = fs::read_to_string(&entry_path)
        .await
        .with_context(|| format!("Failed to read {}", entry_path.display()))?;
    fs::write(&entry_path, inject_doc_routes(&source))
        .await
        .with_context(|| format!("Failed to write {}", entry_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITH_SENTINEL: &str = "\
import { Hono } from \"hono\";

const app = new Hono();

app.get(\"/\", (c) => c.json({ ok: true }));

// ============================================
// 404 Handler
// ============================================

app.notFound((c) => c.json({ error: \"Not Found\" }, 404));

export default app;
";

    #[test]
    fn test_inserts_before_not_found_sentinel() {
        let result = inject_doc_routes(WITH_SENTINEL);
        assert!(result.starts_with("import { openAPISpecs }"));

        let doc = result.find("app.get(\n  \"/doc\"").unwrap();
        let reference = result.find("app.get(\"/reference\"").unwrap();
        let not_found = result.find("app.notFound").unwrap();
        assert!(doc < reference);
        assert!(reference < not_found);
    }

    #[test]
    fn test_falls_back_to_default_export() {
        let source = "import { Hono } from \"hono\";\nconst app = new Hono();\nexport default app;\n";
        let result = inject_doc_routes(source);
        let routes = result.find("/reference").unwrap();
        let export = result.find("export default").unwrap();
        assert!(routes < export);
    }

    #[test]
    fn test_appends_when_no_marker_exists() {
        let source = "const app = makeApp();\n";
        let result = inject_doc_routes(source);
        assert!(result.contains("/doc"));
        assert!(result.ends_with("app.get(\"/reference\", apiReference({ spec: { url: \"/doc\" } }));\n\n"));
    }

    #[test]
    fn test_reapplication_is_a_no_op() {
        let once = inject_doc_routes(WITH_SENTINEL);
        let twice = inject_doc_routes(&once);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("import { openAPISpecs }").count(), 1);
        assert_eq!(twice.matches("import { apiReference }").count(), 1);
    }
}
