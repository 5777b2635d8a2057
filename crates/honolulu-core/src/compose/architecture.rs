//! Architecture transform
//!
//! The opinionated layout keeps the template's example service layer, CRUD
//! routes, and todo-list components. The unopinionated layout strips all of
//! that down to bare framework stubs.

use super::copier::{remove_dir_if_exists, remove_file_if_exists};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

const API_STUB: &str = r#"import { Hono } from "hono";
import { logger } from "hono/logger";
import { cors } from "hono/cors";

const app = new Hono();

app.use("*", logger());
app.use("*", cors());

app.get("/", (c) => {
  return c.json({ message: "🌺 Welcome to Honolulu API!" });
});

app.get("/health", (c) => {
  return c.json({ status: "healthy", timestamp: new Date().toISOString() });
});

export default {
  port: process.env.PORT || 3000,
  fetch: app.fetch,
};
"#;

const APP_STUB: &str = r#"import { useState } from "react";

function App() {
  const [count, setCount] = useState(0);

  return (
    <main>
      <h1>🌺 Honolulu</h1>
      <button type="button" onClick={() => setCount((c) => c + 1)}>
        count is {count}
      </button>
    </main>
  );
}

export default App;
"#;

const SCHEMA_PLACEHOLDER: &str = "// Define your Drizzle schema here.\n";

/// Strip the example business logic for the unopinionated layout.
pub async fn apply(target_dir: &Path) -> Result<()> {
    let api_src = target_dir.join("apps/api/src");

    remove_dir_if_exists(&api_src.join("services")).await?;
    remove_file_if_exists(&api_src.join("routes/todos.ts")).await?;

    let entry = api_src.join("index.ts");
    fs::write(&entry, API_STUB)
        .await
        .with_context(|| format!("Failed to write {}", entry.display()))?;

    let schema = api_src.join("db/schema.ts");
    if schema.is_file() {
        fs::write(&schema, SCHEMA_PLACEHOLDER)
            .await
            .with_context(|| format!("Failed to write {}", schema.display()))?;
    }

    let components = target_dir.join("apps/web/src/components");
    remove_dir_if_exists(&components).await?;
    fs::create_dir_all(&components)
        .await
        .with_context(|| format!("Failed to create {}", components.display()))?;

    let app = target_dir.join("apps/web/src/App.tsx");
    fs::write(&app, APP_STUB)
        .await
        .with_context(|| format!("Failed to write {}", app.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_stub_has_no_business_routes() {
        assert!(API_STUB.contains("logger()"));
        assert!(API_STUB.contains("cors()"));
        assert!(!API_STUB.contains("todos"));
    }

    #[tokio::test]
    async fn test_apply_strips_examples() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path();
        std::fs::create_dir_all(target.join("apps/api/src/services")).unwrap();
        std::fs::create_dir_all(target.join("apps/api/src/routes")).unwrap();
        std::fs::create_dir_all(target.join("apps/api/src/db")).unwrap();
        std::fs::create_dir_all(target.join("apps/web/src/components")).unwrap();
        std::fs::write(
            target.join("apps/api/src/services/todos.service.ts"),
            "export const list = () => [];",
        )
        .unwrap();
        std::fs::write(target.join("apps/api/src/routes/todos.ts"), "export {};").unwrap();
        std::fs::write(target.join("apps/api/src/index.ts"), "old").unwrap();
        std::fs::write(target.join("apps/api/src/db/schema.ts"), "tables").unwrap();
        std::fs::write(target.join("apps/web/src/components/TodoList.tsx"), "x").unwrap();
        std::fs::write(target.join("apps/web/src/App.tsx"), "old app").unwrap();

        apply(target).await.unwrap();

        assert!(!target.join("apps/api/src/services").exists());
        assert!(!target.join("apps/api/src/routes/todos.ts").exists());
        let entry = std::fs::read_to_string(target.join("apps/api/src/index.ts")).unwrap();
        assert!(!entry.contains("todos"));
        assert_eq!(
            std::fs::read_to_string(target.join("apps/api/src/db/schema.ts")).unwrap(),
            SCHEMA_PLACEHOLDER
        );
        // components directory is emptied but kept
        assert!(target.join("apps/web/src/components").is_dir());
        assert_eq!(
            std::fs::read_dir(target.join("apps/web/src/components"))
                .unwrap()
                .count(),
            0
        );
        let app = std::fs::read_to_string(target.join("apps/web/src/App.tsx")).unwrap();
        assert!(app.contains("useState"));
        assert!(!app.contains("TodoList"));
    }
}
